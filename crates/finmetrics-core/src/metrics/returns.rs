//! Daily returns and the sample statistics the metrics share.

/// Simple returns `(p[i] - p[i-1]) / p[i-1]` of consecutive closes.
///
/// `N` closes yield `N - 1` returns; fewer than two closes yield none.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect()
}

/// Single-pass count, mean and Bessel-corrected variance.
///
/// Uses the [Welford online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleStats {
    count: usize,
    mean: f64,
    m2: f64,
}

impl SampleStats {
    pub fn from_values(values: &[f64]) -> Self {
        values.iter().fold(Self::default(), |stats, value| stats.push(*value))
    }

    #[must_use]
    pub fn push(mut self, value: f64) -> Self {
        self.count += 1;
        let prev_mean = self.mean;
        self.mean += (value - prev_mean) / self.count as f64;
        self.m2 += (value - prev_mean) * (value - self.mean);
        self
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (ddof = 1); `None` below two observations.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Sample standard deviation (ddof = 1); `None` below two observations.
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

/// Sample covariance (ddof = 1) of two equally long samples.
///
/// `None` when the lengths differ or fewer than two pairs are present.
pub fn sample_covariance(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let co_moment = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum::<f64>();

    Some(co_moment / (n - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn returns_of_reference_closes() {
        let returns = daily_returns(&[100.0, 102.0, 101.0, 105.0]);
        assert_eq!(returns.len(), 3);
        approx_eq(returns[0], 0.02, 1e-15);
        approx_eq(returns[1], -1.0 / 102.0, 1e-15);
        approx_eq(returns[2], 4.0 / 101.0, 1e-15);
    }

    #[test]
    fn short_input_has_no_returns() {
        assert!(daily_returns(&[]).is_empty());
        assert!(daily_returns(&[42.0]).is_empty());
    }

    #[test]
    fn welford_matches_two_pass_reference() {
        let returns = daily_returns(&[100.0, 102.0, 101.0, 105.0]);
        let stats = SampleStats::from_values(&returns);

        let mean = returns.iter().sum::<f64>() / 3.0;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / 2.0;

        assert_eq!(stats.count(), 3);
        approx_eq(stats.mean(), mean, 1e-12);
        approx_eq(stats.sample_variance().expect("3 obs"), variance, 1e-12);
        approx_eq(stats.mean(), 0.016_600_012_942_470_7, 1e-9);
        approx_eq(
            stats.sample_std_dev().expect("3 obs"),
            0.024_878_798_886_846_3,
            1e-9,
        );
    }

    #[test]
    fn variance_undefined_below_two_observations() {
        assert_eq!(SampleStats::from_values(&[0.5]).sample_variance(), None);
        assert_eq!(SampleStats::default().sample_std_dev(), None);
    }

    #[test]
    fn covariance_of_sample_with_itself_is_its_variance() {
        let xs = [0.01, -0.02, 0.03, 0.005];
        let variance = SampleStats::from_values(&xs)
            .sample_variance()
            .expect("variance");
        approx_eq(sample_covariance(&xs, &xs).expect("cov"), variance, 1e-15);
        assert_eq!(sample_covariance(&xs, &xs[..3]), None);
    }
}
