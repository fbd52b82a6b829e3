use livetemp_core::units::{celsius_to_fahrenheit, round_tenths};
use livetemp_core::Reading;
use rand::Rng;

/// Simulated sample source: a uniform Celsius draw converted to Fahrenheit.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    min_c: f64,
    max_c: f64,
}

impl SyntheticSource {
    /// `min_c..=max_c` is the Celsius draw range.  Callers validate
    /// `min_c <= max_c` (config load does).
    pub fn new(min_c: f64, max_c: f64) -> Self {
        Self { min_c, max_c }
    }

    /// Draw a reading stamped with the current time.  Always succeeds.
    pub fn produce(&self) -> Reading {
        let celsius = round_tenths(rand::thread_rng().gen_range(self.min_c..=self.max_c));
        Reading::now(celsius_to_fahrenheit(celsius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn draws_stay_inside_converted_range() {
        let source = SyntheticSource::new(0.0, 5.0);
        for _ in 0..200 {
            let reading = source.produce();
            assert!(reading.temp_f >= 32.0 && reading.temp_f <= 41.0);
        }
    }

    #[test]
    fn degenerate_range_pins_the_value() {
        let source = SyntheticSource::new(2.0, 2.0);
        assert_eq!(source.produce().temp_f, celsius_to_fahrenheit(2.0));
    }

    #[test]
    fn timestamps_are_second_precision() {
        let reading = SyntheticSource::new(0.0, 5.0).produce();
        assert_eq!(reading.timestamp.nanosecond(), 0);
    }
}
