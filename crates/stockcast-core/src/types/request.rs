//! Parameters of a single forecast run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First day of the history window. Not user-configurable.
pub const HISTORY_START: NaiveDate = match NaiveDate::from_ymd_opt(2024, 4, 25) {
    Some(date) => date,
    None => panic!("invalid history start date"),
};

/// Everything one forecast run needs, passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Ticker symbol, e.g. `DCII.JK`
    pub symbol: String,
    /// Number of business days to project
    pub horizon_days: usize,
    /// End of the history window (exclusive)
    pub end_date: NaiveDate,
}

impl ForecastRequest {
    /// Create a new request.
    pub fn new(symbol: impl Into<String>, horizon_days: usize, end_date: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            horizon_days,
            end_date,
        }
    }

    /// Start of the history window.
    pub fn start_date(&self) -> NaiveDate {
        HISTORY_START
    }
}

impl fmt::Display for ForecastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} +{}d (history {} .. {})",
            self.symbol, self.horizon_days, HISTORY_START, self.end_date
        )
    }
}
