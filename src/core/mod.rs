//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - The displayed value and its sentinels
//! - Operators, numeral parsing/rendering and smart rounding
//! - The display formatter
//! - The registers and the calculation tape
//!
//! Nothing in this module performs I/O.

mod format;
pub mod number;
mod operator;
mod registers;
mod state;
mod tape;
mod value;

pub use format::{format_number, format_number_with, DEFAULT_GROUPING_SEPARATOR};
pub use operator::Operator;
pub use registers::{CalculatorState, PendingOperation};
pub use state::{Phase, State};
pub use tape::{Calculation, Tape, DEFAULT_TAPE_LIMIT};
pub use value::{CurrentValue, ERROR_TEXT, INFINITY_TEXT};
