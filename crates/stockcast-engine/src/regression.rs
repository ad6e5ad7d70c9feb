//! Lagged samples and the single-feature least-squares fit.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// A close paired with the close of the previous trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaggedSample {
    /// Close of the previous bar (the feature)
    pub previous_close: f64,
    /// Close of the current bar (the target)
    pub current_close: f64,
}

/// Pair every close with its predecessor.
///
/// The first close has no predecessor and yields no sample, so `n` closes
/// give `n - 1` samples.
pub fn lagged_samples(closes: &[f64]) -> Vec<LaggedSample> {
    closes
        .windows(2)
        .map(|w| LaggedSample {
            previous_close: w[0],
            current_close: w[1],
        })
        .collect()
}

/// Linear predictor `current = intercept + slope * previous`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Coefficient on the previous close
    pub slope: f64,
    /// Constant term
    pub intercept: f64,
    /// Number of samples the model was fit on
    pub samples: usize,
}

impl LinearModel {
    /// Ordinary least squares fit over all samples.
    ///
    /// Returns `None` when there are no samples. When the feature has no
    /// spread (one sample, or a flat previous-close column) the slope is 0
    /// and the intercept is the mean target, the minimum-norm solution.
    pub fn fit(samples: &[LaggedSample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let x_mean = samples.iter().map(|s| s.previous_close).mean();
        let y_mean = samples.iter().map(|s| s.current_close).mean();

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for s in samples {
            let dx = s.previous_close - x_mean;
            sxy += dx * (s.current_close - y_mean);
            sxx += dx * dx;
        }

        let slope = if sxx.abs() < f64::EPSILON * x_mean.abs().max(1.0) {
            0.0
        } else {
            sxy / sxx
        };

        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
            samples: samples.len(),
        })
    }

    /// Predict the next close from the current one.
    #[inline]
    pub fn predict(&self, previous_close: f64) -> f64 {
        self.intercept + self.slope * previous_close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lagged_samples_drop_first() {
        let samples = lagged_samples(&[100.0, 110.0, 120.0]);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].previous_close, 100.0);
        assert_eq!(samples[0].current_close, 110.0);
        assert_eq!(samples[1].previous_close, 110.0);
        assert_eq!(samples[1].current_close, 120.0);

        assert!(lagged_samples(&[100.0]).is_empty());
        assert!(lagged_samples(&[]).is_empty());
    }

    #[test]
    fn test_fit_linear_trend() {
        let samples = lagged_samples(&[100.0, 110.0, 120.0, 130.0]);
        let model = LinearModel::fit(&samples).unwrap();

        assert!((model.slope - 1.0).abs() < 1e-9);
        assert!((model.intercept - 10.0).abs() < 1e-9);
        assert_eq!(model.samples, 3);
        assert!((model.predict(130.0) - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_minimizes_squared_residuals() {
        let samples = lagged_samples(&[10.0, 12.0, 11.0, 14.0, 13.0, 15.0]);
        let model = LinearModel::fit(&samples).unwrap();

        let sse = |slope: f64, intercept: f64| -> f64 {
            samples
                .iter()
                .map(|s| (s.current_close - (intercept + slope * s.previous_close)).powi(2))
                .sum()
        };

        let best = sse(model.slope, model.intercept);
        for (ds, di) in [(0.01, 0.0), (-0.01, 0.0), (0.0, 0.1), (0.0, -0.1)] {
            assert!(best <= sse(model.slope + ds, model.intercept + di));
        }
    }

    #[test]
    fn test_fit_single_sample_interpolates() {
        let samples = lagged_samples(&[100.0, 105.0]);
        let model = LinearModel::fit(&samples).unwrap();

        assert_eq!(model.slope, 0.0);
        assert!((model.intercept - 105.0).abs() < 1e-9);
        assert!((model.predict(100.0) - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_flat_feature() {
        // Previous closes are all 50, targets differ
        let samples = vec![
            LaggedSample { previous_close: 50.0, current_close: 49.0 },
            LaggedSample { previous_close: 50.0, current_close: 51.0 },
        ];
        let model = LinearModel::fit(&samples).unwrap();

        assert_eq!(model.slope, 0.0);
        assert!((model.intercept - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_empty() {
        assert!(LinearModel::fit(&[]).is_none());
    }
}
