//! The calculator's mutable registers.

use super::operator::Operator;
use super::state::Phase;
use super::value::CurrentValue;
use serde::{Deserialize, Serialize};

/// The operand captured when an operator was chosen, with that operator.
///
/// Keeping both in one value makes "operator set iff previous set" a
/// property of the type.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: String,
    pub operator: Operator,
}

/// Everything a calculator remembers between two key presses.
///
/// Owned by exactly one [`Calculator`](crate::engine::Calculator); only the
/// calculator mutates it.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current: CurrentValue,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) just_evaluated: bool,
    pub(crate) history: String,
}

impl CalculatorState {
    pub fn current(&self) -> &CurrentValue {
        &self.current
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Operand captured by the pending operator, if any.
    pub fn previous(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// True from an equals press until the next digit or dot starts a number.
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// The already formatted expression trail; empty when nothing is active.
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        if self.current.is_sentinel() {
            Phase::Halted
        } else if self.pending.is_some() {
            Phase::Pending
        } else if self.just_evaluated {
            Phase::Evaluated
        } else {
            Phase::Entering
        }
    }
}
