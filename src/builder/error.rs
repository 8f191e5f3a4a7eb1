//! Build and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Digit cap must be at least 1. Omit max_digits to disable the cap")]
    ZeroDigitCap,

    #[error("Tape limit must be at least 1")]
    ZeroTapeLimit,

    #[error("Grouping separator {0:?} would be mistaken for part of a number")]
    InvalidSeparator(char),
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] BuildError),
}
