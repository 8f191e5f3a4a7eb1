//! Builder API and configuration for calculators.
//!
//! This module provides a fluent builder plus a serde-backed configuration
//! that can be read from TOML.

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use config::CalculatorConfig;
pub use error::{BuildError, ConfigError};
