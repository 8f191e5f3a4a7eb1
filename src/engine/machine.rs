//! Calculator that applies actions to its registers.

use crate::builder::CalculatorConfig;
use crate::core::number::{is_finite_numeral, parse_finite, strip_trailing_dot, to_numeral};
use crate::core::{
    format_number_with, Calculation, CalculatorState, CurrentValue, Operator, PendingOperation,
    Phase, State, Tape,
};
use crate::engine::action::{Action, Digit};
use serde::{Deserialize, Serialize};
use std::mem;
use tracing::{debug, trace, warn};

/// What a front end renders after each action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    /// Formatted main display value.
    pub value: String,
    /// Formatted expression trail; may be empty.
    pub history: String,
}

/// A calculator driven one action at a time.
///
/// Every operation is total: it never fails or panics, and it returns the
/// [`Readout`] to render.
///
/// # Example
///
/// ```rust
/// use calcpad::engine::{Action, Calculator};
///
/// let mut calc = Calculator::new();
/// for key in ["0", ".", "1", "+", "0", ".", "2", "="] {
///     calc.dispatch(Action::from_key(key).unwrap());
/// }
///
/// let readout = calc.readout();
/// assert_eq!(readout.value, "0.3");
/// assert_eq!(readout.history, "0.1 + 0.2 =");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    tape: Tape,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Configuration must already be validated.
    pub(crate) fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            tape: Tape::with_limit(config.tape_limit),
            config,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    /// Current display value and history, formatted.
    pub fn readout(&self) -> Readout {
        Readout {
            value: self.format(self.state.current.as_str()),
            history: self.state.history.clone(),
        }
    }

    /// Apply one action and return what to render.
    pub fn dispatch(&mut self, action: Action) -> Readout {
        let before = self.phase();
        let changed = match action {
            Action::Digit(digit) => self.enter_digit(digit),
            Action::Dot => self.enter_dot(),
            Action::Operator(op) => self.choose(op),
            Action::Equals => self.resolve(),
            Action::Clear => self.reset(),
            Action::Delete => self.erase(),
            Action::ToggleSign => self.negate(),
            Action::Percent => self.to_percent(),
        };

        if changed {
            debug!(
                action = action.name(),
                from = before.name(),
                to = self.phase().name(),
                current = %self.state.current,
                "Applied action"
            );
        } else {
            trace!(action = action.name(), phase = before.name(), "Action ignored");
        }

        self.readout()
    }

    pub fn input_digit(&mut self, digit: Digit) -> Readout {
        self.dispatch(Action::Digit(digit))
    }

    pub fn input_dot(&mut self) -> Readout {
        self.dispatch(Action::Dot)
    }

    pub fn toggle_sign(&mut self) -> Readout {
        self.dispatch(Action::ToggleSign)
    }

    pub fn percent(&mut self) -> Readout {
        self.dispatch(Action::Percent)
    }

    pub fn clear_all(&mut self) -> Readout {
        self.dispatch(Action::Clear)
    }

    pub fn delete(&mut self) -> Readout {
        self.dispatch(Action::Delete)
    }

    pub fn choose_operator(&mut self, op: Operator) -> Readout {
        self.dispatch(Action::Operator(op))
    }

    pub fn evaluate(&mut self) -> Readout {
        self.dispatch(Action::Equals)
    }

    fn format(&self, text: &str) -> String {
        format_number_with(text, self.config.grouping_separator)
    }

    /// Replace a sentinel with "0" so entry can resume.
    fn leave_sentinel(&mut self) {
        if self.state.current.is_sentinel() {
            self.state.current = CurrentValue::zero();
        }
    }

    /// Start a fresh numeral after a result, clearing the history line.
    fn start_fresh(&mut self, numeral: String) {
        self.state.current = CurrentValue::Numeral(numeral);
        self.state.just_evaluated = false;
        self.state.history.clear();
    }

    fn enter_digit(&mut self, digit: Digit) -> bool {
        self.leave_sentinel();
        if self.state.just_evaluated {
            self.start_fresh(digit.to_string());
            return true;
        }

        let max_digits = self.config.max_digits;
        let CurrentValue::Numeral(numeral) = &mut self.state.current else {
            return false;
        };
        match numeral.as_str() {
            "0" => *numeral = digit.to_string(),
            "-0" => *numeral = format!("-{digit}"),
            _ => {
                let held = numeral.chars().filter(char::is_ascii_digit).count();
                if max_digits.is_some_and(|max| held >= max) {
                    return false;
                }
                numeral.push(digit.as_char());
            }
        }
        true
    }

    fn enter_dot(&mut self) -> bool {
        self.leave_sentinel();
        if self.state.just_evaluated {
            self.start_fresh("0.".to_string());
            return true;
        }

        let CurrentValue::Numeral(numeral) = &mut self.state.current else {
            return false;
        };
        if numeral.contains('.') {
            return false;
        }
        numeral.push('.');
        true
    }

    fn negate(&mut self) -> bool {
        let CurrentValue::Numeral(numeral) = &mut self.state.current else {
            return false;
        };
        if !accepts_unary(numeral) {
            return false;
        }

        if let Some(positive) = numeral.strip_prefix('-') {
            *numeral = positive.to_string();
        } else if numeral.as_str() == "0" {
            *numeral = "-0".to_string();
        } else if numeral.as_str() == "0." {
            return false;
        } else {
            numeral.insert(0, '-');
        }
        true
    }

    fn to_percent(&mut self) -> bool {
        let CurrentValue::Numeral(numeral) = &self.state.current else {
            return false;
        };
        if !accepts_unary(numeral) {
            return false;
        }

        match parse_finite(strip_trailing_dot(numeral)) {
            // Not smart-rounded, unlike evaluation.
            Some(n) => self.state.current = CurrentValue::Numeral(to_numeral(n / 100.0)),
            None => self.halt(CurrentValue::Error),
        }
        true
    }

    fn reset(&mut self) -> bool {
        self.state = CalculatorState::default();
        true
    }

    fn erase(&mut self) -> bool {
        if self.state.just_evaluated {
            return false;
        }

        match &mut self.state.current {
            CurrentValue::Numeral(numeral) => {
                let collapses =
                    numeral.len() <= 1 || (numeral.len() == 2 && numeral.starts_with('-'));
                if collapses {
                    *numeral = "0".to_string();
                } else {
                    numeral.pop();
                }
            }
            sentinel => *sentinel = CurrentValue::zero(),
        }
        true
    }

    fn choose(&mut self, op: Operator) -> bool {
        let CurrentValue::Numeral(numeral) = &mut self.state.current else {
            return false;
        };
        if numeral.ends_with('.') {
            *numeral = strip_trailing_dot(numeral).to_string();
        }

        if self.state.pending.is_some() && !self.state.just_evaluated {
            self.resolve();
        }

        // A sentinel left by chaining becomes the operand and fails on `=`.
        let operand = match mem::replace(&mut self.state.current, CurrentValue::zero()) {
            CurrentValue::Numeral(operand) => operand,
            sentinel => sentinel.as_str().to_string(),
        };

        self.state.history = format!("{} {}", self.format(&operand), op.symbol());
        self.state.pending = Some(PendingOperation {
            operand,
            operator: op,
        });
        self.state.just_evaluated = false;
        true
    }

    fn resolve(&mut self) -> bool {
        let rhs = match &self.state.current {
            CurrentValue::Numeral(numeral) => parse_finite(strip_trailing_dot(numeral)),
            _ => return false,
        };
        let Some(PendingOperation { operand, operator }) = self.state.pending.take() else {
            self.state.just_evaluated = true;
            return true;
        };
        let (Some(lhs), Some(rhs)) = (parse_finite(&operand), rhs) else {
            self.halt(CurrentValue::Error);
            return true;
        };

        let result = operator.apply(lhs, rhs);
        self.tape = mem::take(&mut self.tape).record(Calculation::new(
            lhs,
            operator,
            rhs,
            result.clone(),
        ));

        if result.is_sentinel() {
            self.halt(result);
            return true;
        }

        self.state.history = format!(
            "{} {} {} =",
            self.format(&to_numeral(lhs)),
            operator.symbol(),
            self.format(&to_numeral(rhs))
        );
        self.state.current = result;
        self.state.just_evaluated = true;
        true
    }

    /// Put a sentinel on the display and drop everything pending.
    fn halt(&mut self, sentinel: CurrentValue) {
        warn!(sentinel = sentinel.name(), "Calculation halted");
        self.state.current = sentinel;
        self.state.pending = None;
        self.state.just_evaluated = true;
        self.state.history.clear();
    }
}

/// Sign toggle and percent apply to finite numerals, including ones with a
/// trailing dot that would not parse on their own.
fn accepts_unary(numeral: &str) -> bool {
    is_finite_numeral(numeral) || numeral.ends_with('.')
}
