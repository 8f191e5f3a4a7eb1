//! Record of completed calculations.
//!
//! Every evaluation that reaches the arithmetic step, including ones forced
//! by operator chaining, lands on the tape. The tape is bounded: once full,
//! the oldest entry is dropped.

use super::number::to_numeral;
use super::operator::Operator;
use super::value::CurrentValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of calculations a tape keeps unless configured otherwise.
pub const DEFAULT_TAPE_LIMIT: usize = 100;

/// A single completed calculation.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{Calculation, CurrentValue, Operator};
///
/// let calc = Calculation::new(1.5, Operator::Multiply, 4.0, CurrentValue::Numeral("6".into()));
/// assert_eq!(calc.equation(), "1.5 × 4 = 6");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    /// A numeral, or [`CurrentValue::Infinity`] for division by zero.
    pub result: CurrentValue,
    /// When the calculation was evaluated
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    pub fn new(lhs: f64, operator: Operator, rhs: f64, result: CurrentValue) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result,
            timestamp: Utc::now(),
        }
    }

    /// Unformatted one-line rendering, e.g. `1 + 2 = 3`.
    pub fn equation(&self) -> String {
        format!(
            "{} {} {} = {}",
            to_numeral(self.lhs),
            self.operator.symbol(),
            to_numeral(self.rhs),
            self.result
        )
    }
}

/// Ordered, bounded list of calculations, oldest first.
///
/// `record` consumes the tape and returns it with the calculation added, so
/// a tape can be threaded through pure code.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{Calculation, CurrentValue, Operator, Tape};
///
/// let tape = Tape::with_limit(2)
///     .record(Calculation::new(1.0, Operator::Add, 2.0, CurrentValue::Numeral("3".into())))
///     .record(Calculation::new(3.0, Operator::Add, 4.0, CurrentValue::Numeral("7".into())))
///     .record(Calculation::new(7.0, Operator::Divide, 0.0, CurrentValue::Infinity));
///
/// assert_eq!(tape.len(), 2);
/// assert_eq!(tape.results(), vec![&CurrentValue::Numeral("7".into()), &CurrentValue::Infinity]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    entries: VecDeque<Calculation>,
    limit: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::with_limit(DEFAULT_TAPE_LIMIT)
    }
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tape holding at most `limit` calculations.
    ///
    /// A limit of zero is raised to one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_TAPE_LIMIT)),
            limit,
        }
    }

    /// Record a calculation, dropping the oldest one when full.
    pub fn record(mut self, calculation: Calculation) -> Self {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(calculation);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = &Calculation> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&Calculation> {
        self.entries.back()
    }

    /// Results in the order they were produced.
    pub fn results(&self) -> Vec<&CurrentValue> {
        self.entries.iter().map(|c| &c.result).collect()
    }

    /// Time between the first and last recorded calculation.
    ///
    /// Returns `None` if the tape is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
