//! Core traits for the forecaster.

mod data_source;

pub use data_source::DataSource;
