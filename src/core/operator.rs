//! Binary operators and their arithmetic.

use super::number::{round_smart, to_numeral};
use super::value::CurrentValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four keypad operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown in the history line. Subtract uses U+2212, not a hyphen.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// ASCII key that selects this operator.
    pub fn key(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    /// Apply the operator and smart-round the result.
    ///
    /// Division by zero (of either sign) yields [`CurrentValue::Infinity`].
    /// Overflow is an ordinary result that renders as `"Infinity"` or
    /// `"-Infinity"`.
    ///
    /// ```rust
    /// use calcpad::core::{CurrentValue, Operator};
    ///
    /// assert_eq!(
    ///     Operator::Add.apply(0.1, 0.2),
    ///     CurrentValue::Numeral("0.3".to_string())
    /// );
    /// assert_eq!(Operator::Divide.apply(5.0, 0.0), CurrentValue::Infinity);
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> CurrentValue {
        let raw = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide if rhs == 0.0 => return CurrentValue::Infinity,
            Self::Divide => lhs / rhs,
        };
        CurrentValue::Numeral(to_numeral(round_smart(raw)))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
