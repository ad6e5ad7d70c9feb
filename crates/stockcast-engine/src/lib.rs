//! Forecast engine.
//!
//! Fits a one-step-ahead linear model of today's close on yesterday's
//! close, then applies it recursively to project closes for the next
//! business days:
//! - Lagged samples and the OLS fit ([`LinearModel`])
//! - Business-day calendar without holidays
//! - The recursive [`forecast`] routine
//! - [`ForecastPipeline`], which fetches history and runs the forecast

pub mod calendar;
pub mod forecast;
pub mod pipeline;
pub mod regression;

pub use calendar::{business_days_after, is_business_day, next_business_day};
pub use forecast::{forecast, ForecastSequence};
pub use pipeline::{ForecastOutcome, ForecastPipeline};
pub use regression::{lagged_samples, LaggedSample, LinearModel};
