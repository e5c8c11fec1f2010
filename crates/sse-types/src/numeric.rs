//! Numeric helpers used by every scoring stage.

/// Clamp `value` into `[low, high]`.
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

/// Clamp `value` into the unit interval.
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Round to four decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Arithmetic mean, or `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp01(1.4), 1.0);
        assert_eq!(clamp01(-0.2), 0.0);
        assert_eq!(clamp(0.99, 0.05, 0.95), 0.95);
        assert_eq!(clamp(0.5, 0.05, 0.95), 0.5);
    }

    #[test]
    fn round4_truncates_noise() {
        assert_eq!(round4(0.123_456), 0.1235);
        assert_eq!(round4(-0.000_04), -0.0);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        let m = mean(vec![0.2, 0.4]).unwrap();
        assert!((m - 0.3).abs() < 1e-12);
    }
}
