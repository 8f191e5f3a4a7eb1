//! The stateful shell around the pure core.
//!
//! # Key Concepts
//!
//! - **Actions**: normalized input events decoded from keys or buttons
//! - **Calculator**: owns the registers and applies one action at a time
//! - **Readout**: the two strings a front end renders after each action
//!
//! Actions are processed synchronously and to completion; a calculator is
//! never observed mid-update.

mod action;
mod machine;

pub use action::{Action, Digit, InputError};
pub use machine::{Calculator, Readout};
