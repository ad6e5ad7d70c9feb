//! Forecast output types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One projected trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Business day being projected
    pub date: NaiveDate,
    /// Predicted closing price
    pub predicted_close: f64,
}

impl ForecastPoint {
    /// Create a new forecast point.
    pub fn new(date: NaiveDate, predicted_close: f64) -> Self {
        Self {
            date,
            predicted_close,
        }
    }
}
