//! Calculator configuration.

use crate::builder::error::{BuildError, ConfigError};
use crate::core::{DEFAULT_GROUPING_SEPARATOR, DEFAULT_TAPE_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable behaviour of a calculator.
///
/// Every field has a default, so an empty TOML document is a valid config.
///
/// ```rust
/// use calcpad::builder::CalculatorConfig;
///
/// let config = CalculatorConfig::from_toml_str(r#"
///     max_digits = 16
///     grouping_separator = "'"
/// "#).unwrap();
///
/// assert_eq!(config.max_digits, Some(16));
/// assert_eq!(config.grouping_separator, '\'');
/// assert_eq!(config.tape_limit, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Ignore further digits once a numeral holds this many. `None` means
    /// no cap.
    pub max_digits: Option<usize>,

    /// Character inserted between thousands on the display.
    pub grouping_separator: char,

    /// Calculations kept on the tape.
    pub tape_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_digits: None,
            grouping_separator: DEFAULT_GROUPING_SEPARATOR,
            tape_limit: DEFAULT_TAPE_LIMIT,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_digits == Some(0) {
            return Err(BuildError::ZeroDigitCap);
        }
        if self.tape_limit == 0 {
            return Err(BuildError::ZeroTapeLimit);
        }
        let sep = self.grouping_separator;
        if sep.is_ascii_digit()
            || sep.is_ascii_whitespace()
            || matches!(sep, '.' | '-' | '+' | 'e' | 'E')
        {
            return Err(BuildError::InvalidSeparator(sep));
        }
        Ok(())
    }
}
