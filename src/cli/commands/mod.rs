//! CLI command implementations.

pub mod forecast;
pub mod validate;
