//! Core types and traits for the stockcast forecaster.
//!
//! This crate provides the shared building blocks:
//! - Market data types (Bar, PriceSeries)
//! - The forecast output point (ForecastPoint)
//! - The run request (ForecastRequest)
//! - The DataSource trait implemented by market-data providers

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, ForecastError, StockcastError};
pub use traits::*;
pub use types::*;
