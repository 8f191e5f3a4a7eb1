//! Calcpad: a keystroke-driven calculator state machine
//!
//! Calcpad turns a stream of keypad events (digits, operators, equals,
//! clear, delete, sign toggle, percent) into a running calculation and
//! renders two strings after every event: the display value and the
//! history line above it.
//!
//! # Core Concepts
//!
//! - **Numerals**: the display keeps the exact keystrokes (`"-0"`, `"3."`)
//!   and only parses them when arithmetic is needed
//! - **Sentinels**: `Error` and `∞` are terminal display states that clear
//!   themselves on the next digit
//! - **Smart rounding**: results are rounded to 12 decimals, so
//!   `0.1 + 0.2` shows `0.3`
//! - **Chaining**: choosing an operator while one is pending evaluates it
//!
//! # Example
//!
//! ```rust
//! use calcpad::core::Operator;
//! use calcpad::engine::{Calculator, Digit};
//!
//! let mut calc = Calculator::new();
//! let d = |n| Digit::new(n).unwrap();
//!
//! calc.input_digit(d(1));
//! calc.choose_operator(Operator::Add);
//! calc.input_digit(d(2));
//! let readout = calc.evaluate();
//! assert_eq!(readout.value, "3");
//! assert_eq!(readout.history, "1 + 2 =");
//!
//! calc.choose_operator(Operator::Add);
//! calc.input_digit(d(4));
//! assert_eq!(calc.evaluate().value, "7");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{CalculatorBuilder, CalculatorConfig};
pub use crate::core::{format_number, CurrentValue, Operator, State};
pub use crate::engine::{Action, Calculator, Digit, Readout};
