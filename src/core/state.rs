//! Core State trait and the calculator's derived phase.
//!
//! Anything the calculator can be "in" implements [`State`], which provides
//! pure methods for inspecting it without side effects. Both the displayed
//! [`CurrentValue`](super::CurrentValue) and the machine-wide [`Phase`]
//! implement it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for calculator states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: states are copied into readouts and the tape
/// - `PartialEq`: states are compared in tests and diagnostics
/// - `Debug`: states appear in log events
/// - `Serialize` + `Deserialize`: states travel in JSON readouts
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CurrentValue, State};
///
/// let value = CurrentValue::Infinity;
/// assert_eq!(value.name(), "Infinity");
/// assert!(value.is_final());
/// assert!(!value.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Terminal states accept no further composition; the next entry
    /// starts over from zero.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Coarse classification of a calculator, derived from its registers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Typing an operand with no operator pending.
    Entering,
    /// An operator has been chosen and the second operand is being typed.
    Pending,
    /// A result (or a bare equals) is on the display.
    Evaluated,
    /// The display holds `Error` or `∞`.
    Halted,
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Evaluated => "Evaluated",
            Self::Halted => "Halted",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Halted)
    }
}
