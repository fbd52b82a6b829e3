//! Least-squares trend line over a windowed series.
//!
//! The fit is positional: x is the window index `0..len`, equally spaced
//! regardless of the real timestamps.  Recomputed per render from the
//! current snapshot; never stored.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendError {
    /// Fewer than two points; no line is computable.  Callers render the
    /// chart without a trend instead of failing.
    #[error("need at least 2 points to fit a trend, got {0}")]
    InsufficientData(usize),
}

/// An ordinary-least-squares line fit over a window of values.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    /// `fitted[i] = slope * i + intercept`, same length as the input.
    pub fitted: Vec<f64>,
}

impl TrendFit {
    /// Window index the chart annotation is anchored at.
    #[must_use]
    pub fn label_index(&self) -> usize {
        self.fitted.len() / 2
    }

    /// Fitted value at the annotation anchor.
    #[must_use]
    pub fn label_value(&self) -> f64 {
        self.fitted[self.label_index()]
    }

    /// Annotation text, e.g. `y = 0.75x + 33.20`.
    #[must_use]
    pub fn label_text(&self) -> String {
        format!("y = {:.2}x + {:.2}", self.slope, self.intercept)
    }
}

/// Fit a line to `values` against their indices.
pub fn fit(values: &[f64]) -> Result<TrendFit, TrendError> {
    let n = values.len();
    if n < 2 {
        return Err(TrendError::InsufficientData(n));
    }

    let nf = n as f64;
    let sum_x: f64 = (0..n).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_xx: f64 = (0..n).map(|i| (i * i) as f64).sum();

    // Denominator is n * Var(x) * n, nonzero whenever n >= 2.
    let slope = (nf * sum_xy - sum_x * sum_y) / (nf * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / nf;

    let fitted = (0..n).map(|i| slope * i as f64 + intercept).collect();

    Ok(TrendFit {
        slope,
        intercept,
        fitted,
    })
}
