//! Normalized input events.
//!
//! Front ends translate whatever they receive (key names, button
//! descriptors) into an [`Action`] and hand it to the calculator.

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal digit, 0 through 9.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InputError::InvalidDigit(value.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eight things a user can do.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Action {
    Digit(Digit),
    Dot,
    Operator(Operator),
    Equals,
    Clear,
    Delete,
    ToggleSign,
    Percent,
}

/// Errors that can occur when decoding raw input into an [`Action`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    #[error("Unknown button action '{0}'")]
    UnknownButton(String),

    #[error("Button '{0}' requires a value")]
    MissingValue(String),

    #[error("Invalid digit '{0}', expected 0-9")]
    InvalidDigit(String),

    #[error("Invalid operator '{0}', expected one of + - * /")]
    InvalidOperator(String),
}

impl Action {
    /// Name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Dot => "dot",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Delete => "delete",
            Self::ToggleSign => "toggle_sign",
            Self::Percent => "percent",
        }
    }

    /// Decode a keyboard key name.
    ///
    /// Digits, `.` or `,` for the decimal point, `+ - * /`, `Enter` or `=`,
    /// `Backspace` (or `Delete`), `Escape`, `%`, and `Negate` (or `~`, `±`)
    /// for the sign toggle are recognized.
    ///
    /// ```rust
    /// use calcpad::core::Operator;
    /// use calcpad::engine::Action;
    ///
    /// assert_eq!(Action::from_key(","), Ok(Action::Dot));
    /// assert_eq!(Action::from_key("*"), Ok(Action::Operator(Operator::Multiply)));
    /// assert_eq!(Action::from_key("Enter"), Ok(Action::Equals));
    /// assert!(Action::from_key("Tab").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, InputError> {
        match key {
            "." | "," => return Ok(Self::Dot),
            "Enter" | "=" => return Ok(Self::Equals),
            "Backspace" | "Delete" => return Ok(Self::Delete),
            "Escape" => return Ok(Self::Clear),
            "%" => return Ok(Self::Percent),
            "Negate" | "~" | "±" => return Ok(Self::ToggleSign),
            _ => {}
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                if let Some(digit) = Digit::from_char(c) {
                    Ok(Self::Digit(digit))
                } else if let Some(op) = Operator::from_key(c) {
                    Ok(Self::Operator(op))
                } else {
                    Err(InputError::UnknownKey(key.to_string()))
                }
            }
            _ => Err(InputError::UnknownKey(key.to_string())),
        }
    }

    /// Decode an on-screen button descriptor.
    ///
    /// `action` is one of `digit`, `dot`, `op`, `equals`, `ac`, `del`,
    /// `sign`, `percent`; `digit` and `op` carry their key as `value`.
    pub fn from_button(action: &str, value: Option<&str>) -> Result<Self, InputError> {
        match action {
            "digit" => {
                let value = value.ok_or_else(|| InputError::MissingValue(action.to_string()))?;
                single_char(value)
                    .and_then(Digit::from_char)
                    .map(Self::Digit)
                    .ok_or_else(|| InputError::InvalidDigit(value.to_string()))
            }
            "op" => {
                let value = value.ok_or_else(|| InputError::MissingValue(action.to_string()))?;
                single_char(value)
                    .and_then(Operator::from_key)
                    .map(Self::Operator)
                    .ok_or_else(|| InputError::InvalidOperator(value.to_string()))
            }
            "dot" => Ok(Self::Dot),
            "equals" => Ok(Self::Equals),
            "ac" => Ok(Self::Clear),
            "del" => Ok(Self::Delete),
            "sign" => Ok(Self::ToggleSign),
            "percent" => Ok(Self::Percent),
            other => Err(InputError::UnknownButton(other.to_string())),
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
