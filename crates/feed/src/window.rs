use livetemp_core::Reading;
use std::collections::VecDeque;

/// Fixed-capacity rolling buffer of the most recent readings.
///
/// Strict FIFO: appending at capacity evicts the oldest entry first.
/// Insertion order is meaningful — it is the x-axis ordinal for the trend
/// fit and the row order of the readings table.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl RollingWindow {
    /// Create an empty window.  Capacity is fixed for the window's lifetime.
    pub fn new(capacity: usize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, evicting from the front while over capacity.
    pub fn append(&mut self, reading: Reading) {
        self.readings.push_back(reading);
        while self.readings.len() > self.capacity {
            self.readings.pop_front();
        }
    }

    /// Owned copy of the window contents, oldest first.
    ///
    /// Never exposes the internal buffer, so no reader can observe a
    /// partially evicted state.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Reading> {
        self.readings.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temp_f: f64) -> Reading {
        Reading::now(temp_f)
    }

    fn temps(window: &RollingWindow) -> Vec<f64> {
        window.snapshot().iter().map(|r| r.temp_f).collect()
    }

    #[test]
    fn append_below_capacity_keeps_everything() {
        let mut window = RollingWindow::new(5);
        for v in [1.0, 2.0, 3.0] {
            window.append(reading(v));
        }
        assert_eq!(temps(&window), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn overflow_evicts_oldest_first() {
        // seven appends into a five-slot window keep the last five
        let mut window = RollingWindow::new(5);
        for v in 1..=7 {
            window.append(reading(v as f64));
        }
        assert_eq!(window.len(), 5);
        assert_eq!(temps(&window), vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn exactly_capacity_round_trips_in_order() {
        let mut window = RollingWindow::new(5);
        let inserted: Vec<f64> = (0..5).map(|v| 30.0 + v as f64).collect();
        for &v in &inserted {
            window.append(reading(v));
        }
        assert_eq!(temps(&window), inserted);
    }

    #[test]
    fn snapshot_is_idempotent() {
        let mut window = RollingWindow::new(3);
        window.append(reading(35.1));
        window.append(reading(35.9));
        assert_eq!(window.snapshot(), window.snapshot());
    }

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let mut window = RollingWindow::new(3);
        window.append(reading(35.1));
        let before = window.snapshot();
        window.append(reading(36.2));
        assert_eq!(before.len(), 1);
        assert_eq!(window.len(), 2);
    }
}
