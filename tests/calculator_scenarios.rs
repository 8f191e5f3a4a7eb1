//! End-to-end key sequences through the public API.

use calcpad::builder::CalculatorBuilder;
use calcpad::core::{CurrentValue, Operator, Phase};
use calcpad::engine::{Action, Calculator, Readout};

fn run(calc: &mut Calculator, keys: &[&str]) -> Readout {
    let mut readout = calc.readout();
    for key in keys {
        readout = calc.dispatch(Action::from_key(key).unwrap());
    }
    readout
}

fn run_fresh(keys: &[&str]) -> (Calculator, Readout) {
    let mut calc = Calculator::new();
    let readout = run(&mut calc, keys);
    (calc, readout)
}

#[test]
fn result_feeds_next_operation() {
    let (mut calc, readout) = run_fresh(&["1", "+", "2", "Enter"]);
    assert_eq!(readout.value, "3");

    let readout = run(&mut calc, &["+", "4", "="]);
    assert_eq!(readout.value, "7");
    assert_eq!(readout.history, "3 + 4 =");
}

#[test]
fn division_by_zero_then_recovery() {
    let (mut calc, readout) = run_fresh(&["5", "/", "0", "="]);
    assert_eq!(readout.value, "∞");
    assert_eq!(readout.history, "");
    assert_eq!(calc.state().current(), &CurrentValue::Infinity);
    assert!(calc.state().pending().is_none());

    let readout = run(&mut calc, &["Backspace"]);
    assert_eq!(readout.value, "∞", "delete is ignored right after a result");

    let readout = run(&mut calc, &["2", "*", "3", "="]);
    assert_eq!(readout.value, "6");
}

#[test]
fn rounding_hides_float_noise() {
    let (_, readout) = run_fresh(&["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(readout.value, "0.3");

    let (_, readout) = run_fresh(&["1", ",", "1", "*", "3", "="]);
    assert_eq!(readout.value, "3.3");
}

#[test]
fn long_chain_without_equals() {
    let (calc, readout) = run_fresh(&["1", "0", "-", "4", "*", "3", "/", "2", "="]);
    // Left to right, no precedence: ((10 - 4) * 3) / 2
    assert_eq!(readout.value, "9");
    assert_eq!(readout.history, "18 ÷ 2 =");
    assert_eq!(calc.tape().len(), 3);
}

#[test]
fn negative_entry_from_zero() {
    let mut calc = Calculator::new();
    calc.dispatch(Action::ToggleSign);
    assert_eq!(calc.readout().value, "-0");

    let readout = run(&mut calc, &["5", "0", "0", "0"]);
    assert_eq!(readout.value, "-5,000");
}

#[test]
fn large_numbers_are_grouped() {
    let (_, readout) = run_fresh(&["1", "2", "3", "4", "5", "6", "7", ".", "8", "9"]);
    assert_eq!(readout.value, "1,234,567.89");
}

#[test]
fn percent_then_operation() {
    let (mut calc, readout) = run_fresh(&["5", "0", "%"]);
    assert_eq!(readout.value, "0.5");

    let readout = run(&mut calc, &["*", "8", "="]);
    assert_eq!(readout.value, "4");
}

#[test]
fn escape_clears_everything() {
    let (mut calc, _) = run_fresh(&["9", "+", "1"]);
    let readout = run(&mut calc, &["Escape"]);
    assert_eq!(readout.value, "0");
    assert_eq!(readout.history, "");
    assert_eq!(calc.state().operator(), None);
    assert_eq!(calc.phase(), Phase::Entering);
}

#[test]
fn repeated_equals_is_harmless() {
    let (mut calc, readout) = run_fresh(&["6", "*", "7", "=", "=", "="]);
    assert_eq!(readout.value, "42");
    assert_eq!(readout.history, "6 × 7 =");
    assert_eq!(calc.tape().len(), 1);

    let readout = run(&mut calc, &["1"]);
    assert_eq!(readout.value, "1");
}

#[test]
fn trailing_dot_operand_is_read_as_integer() {
    let (_, readout) = run_fresh(&["4", ".", "+", "1", ".", "="]);
    assert_eq!(readout.value, "5");
    assert_eq!(readout.history, "4 + 1 =");
}

#[test]
fn buttons_and_keys_agree() {
    let mut by_button = Calculator::new();
    for (action, value) in [
        ("digit", Some("8")),
        ("op", Some("-")),
        ("digit", Some("3")),
        ("sign", None),
        ("equals", None),
    ] {
        by_button.dispatch(Action::from_button(action, value).unwrap());
    }

    let mut by_method = Calculator::new();
    by_method.input_digit(calcpad::Digit::new(8).unwrap());
    by_method.choose_operator(Operator::Subtract);
    by_method.input_digit(calcpad::Digit::new(3).unwrap());
    by_method.toggle_sign();
    by_method.evaluate();

    assert_eq!(by_button.readout(), by_method.readout());
    assert_eq!(by_button.readout().value, "11");
    assert_eq!(by_button.readout().history, "8 − -3 =");
}

#[test]
fn independent_calculators_do_not_share_state() {
    let mut first = Calculator::new();
    let mut second = Calculator::new();
    run(&mut first, &["1", "+"]);
    run(&mut second, &["7"]);

    assert_eq!(first.state().operator(), Some(Operator::Add));
    assert_eq!(second.state().operator(), None);
    assert_eq!(second.readout().value, "7");
}

#[test]
fn configured_calculator_honours_settings() {
    let mut calc = CalculatorBuilder::new()
        .max_digits(4)
        .grouping_separator('_')
        .tape_limit(1)
        .build()
        .unwrap();

    let readout = run(&mut calc, &["9", "9", "9", "9", "9"]);
    assert_eq!(readout.value, "9_999");

    run(&mut calc, &["+", "1", "=", "+", "1", "="]);
    assert_eq!(calc.readout().value, "10_001");
    assert_eq!(calc.tape().len(), 1);
    assert_eq!(calc.tape().last().unwrap().equation(), "10000 + 1 = 10001");
}
