//! Error types for the forecaster.

use thiserror::Error;

/// Top-level error of a forecast run.
#[derive(Error, Debug)]
pub enum StockcastError {
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

/// Forecast engine errors.
///
/// Both data errors are terminal for the current run: the caller stops
/// before rendering anything and shows [`ForecastError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("No price data available for {symbol}")]
    DataUnavailable { symbol: String },

    #[error("Insufficient data: need {required} bars, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid horizon: {0} (must be at least 1 day)")]
    InvalidHorizon(usize),
}

impl ForecastError {
    /// Message meant for the person running the tool.
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::DataUnavailable { symbol } => format!(
                "No data available for symbol '{}' in the requested date range. Please enter a valid symbol.",
                symbol
            ),
            ForecastError::InsufficientData { .. } => {
                "Not enough data to make a prediction. Please choose a different date range."
                    .to_string()
            }
            ForecastError::InvalidHorizon(days) => {
                format!("Cannot forecast {} days ahead; choose at least 1 day.", days)
            }
        }
    }
}

/// Data source errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Data not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
