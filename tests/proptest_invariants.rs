//! Property-based invariant tests for the calculator.
//!
//! 1. Addition and multiplication are commutative
//! 2. A failed operation leaves the stack exactly as it was
//! 3. Undo after any arithmetic operation (+ - * / sqrt) restores its operands
//! 4. Display text of a short literal parses back to the same value
//! 5. No panics on arbitrary token sequences

use proptest::prelude::*;

use rpncalc::number::Decimal;
use rpncalc::operation::Operation;
use rpncalc::processor::Calculator;

// ── Strategies ──────────────────────────────────────────────────────────

/// Non-negative decimal literals with at most 10 fractional digits, so
/// display is exact
fn unsigned_literal_strategy() -> impl Strategy<Value = String> {
    (0u64..1_000_000_000, proptest::option::of(0u64..10_000_000_000)).prop_map(
        |(int_part, frac_part)| match frac_part {
            Some(frac) => format!("{int_part}.{frac:010}"),
            None => format!("{int_part}"),
        },
    )
}

fn literal_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), unsigned_literal_strategy()).prop_map(|(negative, digits)| {
        if negative {
            format!("-{digits}")
        } else {
            digits
        }
    })
}

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => literal_strategy(),
        1 => prop::sample::select(vec!["+", "-", "*", "/", "sqrt", "undo", "clear", "?", "(", "0"])
            .prop_map(str::to_string),
    ]
}

fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn add_and_multiply_commute(a in literal_strategy(), b in literal_strategy()) {
        let (a, b) = (dec(&a), dec(&b));
        for op in [Operation::Add, Operation::Multiply] {
            let forward = op.evaluate(&[a.clone(), b.clone()]).unwrap();
            let backward = op.evaluate(&[b.clone(), a.clone()]).unwrap();
            prop_assert_eq!(forward, backward);
        }
    }

    #[test]
    fn failed_division_rolls_back(values in prop::collection::vec(literal_strategy(), 1..8)) {
        let mut calculator = Calculator::new();
        calculator.process_line(&values.join(" "));
        let before = calculator.render();

        let report = calculator.process_line("0 / 1 2 +");
        prop_assert_eq!(report.notices.len(), 1);
        prop_assert_eq!(calculator.render(), format!("{} 0", before));
    }

    #[test]
    fn undo_reverses_binary_operations(
        a in literal_strategy(),
        b in literal_strategy(),
        op in prop::sample::select(vec!["+", "-", "*", "/"]),
    ) {
        prop_assume!(op != "/" || !dec(&b).is_zero());

        let mut calculator = Calculator::new();
        calculator.process_line(&format!("{a} {b}"));
        let before = calculator.render();

        calculator.process_line(op);
        prop_assert_eq!(calculator.stack().len(), 1);
        calculator.process_line("undo");
        prop_assert_eq!(calculator.render(), before);
    }

    #[test]
    fn undo_reverses_square_root(below in literal_strategy(), radicand in unsigned_literal_strategy()) {
        let mut calculator = Calculator::new();
        calculator.process_line(&format!("{below} {radicand}"));
        let before = calculator.render();

        let report = calculator.process_line("sqrt");
        prop_assert!(report.notices.is_empty());
        prop_assert_eq!(calculator.stack().len(), 2);
        calculator.process_line("undo");
        prop_assert_eq!(calculator.render(), before);
    }

    #[test]
    fn display_round_trips(text in literal_strategy()) {
        let value = dec(&text);
        let shown = value.to_display_string();
        prop_assert_eq!(dec(&shown), value);
    }

    #[test]
    fn arbitrary_lines_never_panic(tokens in prop::collection::vec(token_strategy(), 0..24)) {
        let mut calculator = Calculator::new();
        let report = calculator.process_line(&tokens.join(" "));
        prop_assert!(report.notices.iter().filter(|n| n.stops_line()).count() <= 1);
        prop_assert!(calculator.render().starts_with("stack: "));
    }
}
