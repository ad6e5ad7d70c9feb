//! Core data types for the forecaster.

mod bar;
mod forecast;
mod request;

pub use bar::{Bar, PriceSeries};
pub use forecast::ForecastPoint;
pub use request::{ForecastRequest, HISTORY_START};
