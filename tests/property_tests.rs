//! Property-based tests for the calculator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences.

use calcpad::core::number::parse_numeral;
use calcpad::core::{format_number, CurrentValue, Operator, Phase, State};
use calcpad::engine::{Action, Calculator, Digit};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(value in 0..=9u8) -> Digit {
        Digit::new(value).unwrap()
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Action::Digit),
        1 => Just(Action::Dot),
        2 => arbitrary_operator().prop_map(Action::Operator),
        1 => Just(Action::Equals),
        1 => Just(Action::Clear),
        1 => Just(Action::Delete),
        1 => Just(Action::ToggleSign),
        1 => Just(Action::Percent),
    ]
}

proptest! {
    #[test]
    fn digits_are_concatenated_in_order(
        first in 1..=9u8,
        rest in prop::collection::vec(arbitrary_digit(), 0..15),
        dot_at in prop::option::of(0..16usize),
    ) {
        let mut calc = Calculator::new();
        let mut expected = String::new();

        calc.input_digit(Digit::new(first).unwrap());
        expected.push(char::from(b'0' + first));
        for (i, digit) in rest.iter().enumerate() {
            if dot_at == Some(i) {
                calc.input_dot();
                expected.push('.');
            }
            calc.input_digit(*digit);
            expected.push(digit.as_char());
        }

        prop_assert_eq!(calc.state().current().as_str(), expected.as_str());
    }

    #[test]
    fn dot_is_idempotent(digits in prop::collection::vec(arbitrary_digit(), 0..8)) {
        let mut calc = Calculator::new();
        for digit in &digits {
            calc.input_digit(*digit);
        }
        calc.input_dot();
        let once = calc.state().current().clone();
        calc.input_dot();
        prop_assert_eq!(calc.state().current(), &once);
        prop_assert_eq!(once.as_str().matches('.').count(), 1);
    }

    #[test]
    fn formatting_is_deterministic(n in any::<i64>(), frac in prop::option::of(0..1_000_000u32)) {
        let numeral = match frac {
            Some(frac) => format!("{n}.{frac}"),
            None => n.to_string(),
        };
        let first = format_number(&numeral);
        let second = format_number(&numeral);
        prop_assert_eq!(&first, &second);

        // Dropping the separators gives back the original numeral.
        prop_assert_eq!(first.replace(',', ""), numeral);
    }

    #[test]
    fn grouped_integers_have_three_digit_groups(n in any::<u64>()) {
        let formatted = format_number(&n.to_string());
        let groups: Vec<&str> = formatted.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn invariants_hold_for_any_action_stream(
        actions in prop::collection::vec(arbitrary_action(), 0..60)
    ) {
        let mut calc = Calculator::new();
        for action in actions {
            let readout = calc.dispatch(action);
            let state = calc.state();

            prop_assert!(!state.current().as_str().is_empty());
            prop_assert!(state.current().as_str().matches('.').count() <= 1);
            prop_assert_eq!(state.previous().is_some(), state.operator().is_some());
            prop_assert_eq!(&readout, &calc.readout());

            if state.current().is_final() {
                prop_assert!(state.pending().is_none());
                prop_assert!(state.just_evaluated());
                prop_assert_eq!(state.history(), "");
                prop_assert_eq!(calc.phase(), Phase::Halted);
            }
        }
    }

    #[test]
    fn pending_operand_never_ends_with_dot(
        actions in prop::collection::vec(arbitrary_action(), 0..60)
    ) {
        let mut calc = Calculator::new();
        for action in actions {
            calc.dispatch(action);
            if let Some(previous) = calc.state().previous() {
                prop_assert!(!previous.ends_with('.'));
            }
        }
    }

    #[test]
    fn sentinel_clears_on_next_digit(digit in arbitrary_digit()) {
        let mut calc = Calculator::new();
        calc.input_digit(Digit::new(1).unwrap());
        calc.choose_operator(Operator::Divide);
        calc.evaluate();
        prop_assert_eq!(calc.state().current(), &CurrentValue::Infinity);

        calc.input_digit(digit);
        prop_assert_eq!(calc.state().current().as_str(), digit.to_string());
    }

    #[test]
    fn evaluation_results_are_canonical(
        a in -1_000_000i32..1_000_000,
        b in -1_000_000i32..1_000_000,
        op in arbitrary_operator(),
    ) {
        prop_assume!(!(op == Operator::Divide && b == 0));
        let result = op.apply(a as f64, b as f64);
        let numeral = result.numeral().unwrap();
        let value = parse_numeral(numeral).unwrap();
        prop_assert!(value.is_finite());
        prop_assert!(!numeral.ends_with('.'));
        prop_assert_eq!(calcpad::core::number::to_numeral(value), numeral);
    }
}
