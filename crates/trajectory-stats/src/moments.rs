//! Moment and Covariance Helpers
//!
//! Scalar building blocks for the summary-statistic rows. Degenerate
//! inputs (constant series) yield NaN rather than an error; callers that
//! need finite features must avoid zero-variance columns.

/// Arithmetic mean
pub(crate) fn mean(series: &[f64]) -> f64 {
    series.iter().sum::<f64>() / series.len() as f64
}

/// Population variance (denominator N)
pub(crate) fn population_variance(series: &[f64]) -> f64 {
    let m = mean(series);
    series.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / series.len() as f64
}

/// Pearson correlation coefficient of two equal-length series,
/// population convention: (E[xy] - E[x]E[y]) / sqrt(Var[x] * Var[y])
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let product_mean = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| a * b)
        .sum::<f64>()
        / x.len() as f64;
    (product_mean - mean(x) * mean(y)) / (population_variance(x) * population_variance(y)).sqrt()
}

/// Lag-k autocovariance coefficient.
///
/// Sums (x[t+lag] - mean)(x[t] - mean) over the N - lag valid index
/// pairs, divides by N - 1, then divides by the population variance.
/// The N - 1 numerator against the N-denominator variance does not
/// cancel; this mixed normalization is the convention of the reference
/// algorithm and is kept as is.
pub fn auto_covariance(series: &[f64], lag: usize) -> f64 {
    let n = series.len();
    let m = mean(series);

    let mut acc = 0.0;
    for t in 0..n - lag {
        acc += (series[t + lag] - m) * (series[t] - m);
    }
    (acc / (n - 1) as f64) / population_variance(series)
}

/// Lag-1 cross-covariance of two equal-length series.
///
/// Prepends the constant 1 to x and appends the constant 1 to y, then
/// returns the Pearson correlation of the two padded length-(N+1)
/// series. Padding the lag boundary with 1 instead of trimming is an
/// idiosyncrasy inherited from the reference algorithm; it is
/// reproduced exactly, not corrected.
pub fn cross_covariance(x: &[f64], y: &[f64]) -> f64 {
    let mut padded_x = Vec::with_capacity(x.len() + 1);
    padded_x.push(1.0);
    padded_x.extend_from_slice(x);

    let mut padded_y = Vec::with_capacity(y.len() + 1);
    padded_y.extend_from_slice(y);
    padded_y.push(1.0);

    pearson(&padded_x, &padded_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let ramp = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert!((mean(&ramp) - 2.0).abs() < 1e-12);
        assert!((population_variance(&ramp) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_auto_covariance_linear_ramp() {
        // Numerator pairs sum to 4, /(N-1)=4 gives 1, variance 2 gives 0.5
        let ramp = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert!((auto_covariance(&ramp, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_auto_covariance_scale_invariant() {
        let ramp = [0.0, 1.0, 2.0, 3.0, 4.0];
        let scaled: Vec<f64> = ramp.iter().map(|v| v * 3.0).collect();
        let a = auto_covariance(&ramp, 1);
        let b = auto_covariance(&scaled, 1);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_auto_covariance_constant_series_is_nan() {
        let flat = [5.0; 8];
        assert!(auto_covariance(&flat, 1).is_nan());
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);

        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        assert!((pearson(&x, &neg) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_covariance_known_value() {
        // x_p = [1,0,1,2,3,4], y_p = [0,2,4,6,8,1]:
        // cov = 11/12, var_x = 65/36, var_y = 95/12
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 2.0, 4.0, 6.0, 8.0];
        let expected = (11.0 / 12.0) / ((65.0_f64 / 36.0) * (95.0 / 12.0)).sqrt();
        assert!((cross_covariance(&x, &y) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cross_covariance_pads_with_one() {
        // A constant-1 series stays constant after padding, so the
        // padded variance is zero and the coefficient is NaN.
        let ones = [1.0; 5];
        let ramp = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert!(cross_covariance(&ones, &ramp).is_nan());
        // A constant series at any other level gains variance from the
        // padding value and produces a finite coefficient.
        let flat = [7.0; 5];
        assert!(cross_covariance(&flat, &ramp).is_finite());
    }
}
