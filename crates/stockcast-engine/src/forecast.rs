//! Recursive multi-day forecast.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use stockcast_core::error::ForecastError;
use stockcast_core::types::{ForecastPoint, PriceSeries};
use tracing::debug;

use crate::calendar::next_business_day;
use crate::regression::{lagged_samples, LinearModel};

/// Minimum bars needed to produce one lagged sample.
const MIN_BARS: usize = 2;

/// Projected closes together with the model that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSequence {
    /// Model fit on the history
    pub model: LinearModel,
    points: Vec<ForecastPoint>,
}

impl ForecastSequence {
    /// Get the number of projected days.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get all points, earliest first.
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Extract predicted closes as a vector.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted_close).collect()
    }

    /// Extract projected dates as a vector.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Get the last point.
    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }

    /// Mean predicted close, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().map(|p| p.predicted_close).mean())
    }
}

/// Fit once on the series, then project `horizon_days` business days.
///
/// Each prediction is fed back as the next step's input; no market data
/// enters after the fit.
///
/// # Errors
/// * [`ForecastError::DataUnavailable`] if the series is empty
/// * [`ForecastError::InsufficientData`] if it has a single bar
/// * [`ForecastError::InvalidHorizon`] if `horizon_days` is 0
pub fn forecast(series: &PriceSeries, horizon_days: usize) -> Result<ForecastSequence, ForecastError> {
    let last = series.last().ok_or_else(|| ForecastError::DataUnavailable {
        symbol: series.symbol.clone(),
    })?;

    let samples = lagged_samples(&series.closes());
    let model = LinearModel::fit(&samples).ok_or(ForecastError::InsufficientData {
        required: MIN_BARS,
        available: series.len(),
    })?;

    if horizon_days == 0 {
        return Err(ForecastError::InvalidHorizon(horizon_days));
    }

    debug!(
        symbol = %series.symbol,
        slope = model.slope,
        intercept = model.intercept,
        samples = model.samples,
        "Fitted lagged-close model"
    );

    let mut points = Vec::with_capacity(horizon_days);
    let mut current = last.close;
    let mut cursor = last.date;

    for _ in 0..horizon_days {
        cursor = next_business_day(cursor);
        current = model.predict(current);
        points.push(ForecastPoint::new(cursor, current));
    }

    Ok(ForecastSequence { model, points })
}
