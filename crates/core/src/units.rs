/// Convert a Celsius reading to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Round a temperature to one decimal place for display and storage.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    }

    #[test]
    fn top_of_synthetic_range() {
        assert_eq!(celsius_to_fahrenheit(5.0), 41.0);
    }

    #[test]
    fn conversion_is_affine() {
        let mid = celsius_to_fahrenheit(2.5);
        assert!((mid - 36.5).abs() < 1e-9);
    }

    #[test]
    fn rounding_to_tenths() {
        assert_eq!(round_tenths(3.14159), 3.1);
        assert_eq!(round_tenths(4.26), 4.3);
    }
}
