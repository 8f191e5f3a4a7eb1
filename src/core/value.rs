//! The value shown on the main display.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text rendered for [`CurrentValue::Error`].
pub const ERROR_TEXT: &str = "Error";

/// Text rendered for [`CurrentValue::Infinity`].
pub const INFINITY_TEXT: &str = "∞";

/// What the main display currently holds.
///
/// A numeral keeps the exact keystrokes (`"-0"`, `"3."`), so partially typed
/// input renders the way it was entered. The two sentinels are terminal:
/// the next digit or dot starts over from `"0"`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CurrentValue {
    Numeral(String),
    /// An operand could not be read as a finite number.
    Error,
    /// Division by exactly zero. An overflowing result is not this
    /// sentinel; it stays a numeral reading `"Infinity"` or `"-Infinity"`.
    Infinity,
}

impl CurrentValue {
    pub fn zero() -> Self {
        Self::Numeral("0".to_string())
    }

    /// The raw display text, before grouping.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeral(numeral) => numeral,
            Self::Error => ERROR_TEXT,
            Self::Infinity => INFINITY_TEXT,
        }
    }

    pub fn numeral(&self) -> Option<&str> {
        match self {
            Self::Numeral(numeral) => Some(numeral),
            _ => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Numeral(_))
    }
}

impl Default for CurrentValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for CurrentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl State for CurrentValue {
    fn name(&self) -> &str {
        match self {
            Self::Numeral(_) => "Numeral",
            Self::Error => "Error",
            Self::Infinity => "Infinity",
        }
    }

    fn is_final(&self) -> bool {
        self.is_sentinel()
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_render_their_text() {
        assert_eq!(CurrentValue::Error.as_str(), "Error");
        assert_eq!(CurrentValue::Infinity.as_str(), "∞");
        assert_eq!(CurrentValue::Infinity.to_string(), "∞");
    }

    #[test]
    fn numerals_render_verbatim() {
        let value = CurrentValue::Numeral("-0.".to_string());
        assert_eq!(value.as_str(), "-0.");
        assert_eq!(value.numeral(), Some("-0."));
        assert!(!value.is_sentinel());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(CurrentValue::default(), CurrentValue::zero());
        assert_eq!(CurrentValue::default().as_str(), "0");
    }

    #[test]
    fn state_flags_distinguish_sentinels() {
        assert!(!CurrentValue::zero().is_final());
        assert!(CurrentValue::Error.is_final());
        assert!(CurrentValue::Error.is_error());
        assert!(CurrentValue::Infinity.is_final());
        assert!(!CurrentValue::Infinity.is_error());
    }

    #[test]
    fn value_serializes_correctly() {
        let value = CurrentValue::Numeral("12.5".to_string());
        let json = serde_json::to_string(&value).unwrap();
        let deserialized: CurrentValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, deserialized);
    }
}
