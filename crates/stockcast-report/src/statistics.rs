//! Forecast summary statistics.

use serde::{Deserialize, Serialize};
use stockcast_core::types::PriceSeries;
use stockcast_engine::ForecastSequence;

/// Scalar statistics shown next to the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of observed bars
    pub history_points: usize,
    /// Mean of the observed closes
    pub mean_actual: f64,
    /// Mean of the predicted closes
    pub mean_predicted: f64,
    /// Last observed close
    pub last_actual: f64,
    /// Last predicted close
    pub last_predicted: f64,
    /// Change from last observed to last predicted close, in percent
    pub projected_change_pct: f64,
    /// Slope of the fitted model
    pub slope: f64,
    /// Intercept of the fitted model
    pub intercept: f64,
}

impl SummaryStats {
    /// Compute statistics for a history and its forecast.
    pub fn compute(history: &PriceSeries, forecast: &ForecastSequence) -> Self {
        let last_actual = history.last().map(|b| b.close).unwrap_or(0.0);
        let last_predicted = forecast.last().map(|p| p.predicted_close).unwrap_or(0.0);

        let projected_change_pct = if last_actual != 0.0 {
            (last_predicted - last_actual) / last_actual * 100.0
        } else {
            0.0
        };

        Self {
            history_points: history.len(),
            mean_actual: history.mean_close().unwrap_or(0.0),
            mean_predicted: forecast.mean().unwrap_or(0.0),
            last_actual,
            last_predicted,
            projected_change_pct,
            slope: forecast.model.slope,
            intercept: forecast.model.intercept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockcast_engine::forecast;

    #[test]
    fn test_compute_on_trend() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        let history = PriceSeries::from_closes(
            "TEST",
            vec![(d(6), 100.0), (d(7), 110.0), (d(8), 120.0), (d(9), 130.0)],
        );
        let projected = forecast(&history, 2).unwrap();

        let stats = SummaryStats::compute(&history, &projected);

        assert_eq!(stats.history_points, 4);
        assert!((stats.mean_actual - 115.0).abs() < 1e-9);
        assert!((stats.mean_predicted - 145.0).abs() < 1e-6);
        assert!((stats.last_actual - 130.0).abs() < 1e-9);
        assert!((stats.last_predicted - 150.0).abs() < 1e-6);
        assert!((stats.projected_change_pct - 15.384615).abs() < 1e-4);
        assert!((stats.slope - 1.0).abs() < 1e-6);
        assert!((stats.intercept - 10.0).abs() < 1e-6);
    }
}
