//! Summary statistics over trial results.

/// Critical value of the standard normal distribution for a two-sided 95%
/// confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (`n - 1` in the denominator).
///
/// A single sample has no spread, so anything shorter than two values
/// yields `0.0`.
pub fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let sum_sq = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Half-width of the 95% confidence interval for the mean of `samples`
/// values with standard deviation `stddev`.
pub fn confidence_radius(stddev: f64, samples: usize) -> f64 {
    CONFIDENCE_95 * stddev / (samples as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_stddev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert!((sample_stddev(&values) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn degenerate() {
        assert!(mean(&[]).is_nan());
        assert_eq!(sample_stddev(&[]), 0.0);
        assert_eq!(sample_stddev(&[0.3]), 0.0);
        assert_eq!(confidence_radius(0.0, 5), 0.0);
    }
}
