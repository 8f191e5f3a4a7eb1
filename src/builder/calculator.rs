//! Builder for constructing calculators.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::engine::Calculator;
use tracing::info;

/// Builder for constructing calculators with a fluent API.
///
/// ```rust
/// use calcpad::builder::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .max_digits(15)
///     .grouping_separator('_')
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.config().max_digits, Some(15));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a whole configuration, e.g. one loaded from a file.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Cap the number of digits in a typed numeral.
    pub fn max_digits(mut self, max: usize) -> Self {
        self.config.max_digits = Some(max);
        self
    }

    pub fn grouping_separator(mut self, separator: char) -> Self {
        self.config.grouping_separator = separator;
        self
    }

    pub fn tape_limit(mut self, limit: usize) -> Self {
        self.config.tape_limit = limit;
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;
        info!(
            max_digits = ?self.config.max_digits,
            separator = %self.config.grouping_separator,
            tape_limit = self.config.tape_limit,
            "Calculator built"
        );
        Ok(Calculator::with_config(self.config))
    }
}
