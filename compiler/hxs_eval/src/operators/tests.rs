#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn terms(source: &str) -> Vec<Term> {
    hxs_lexer::lex(source)
        .unwrap()
        .into_iter()
        .map(Term::Node)
        .collect()
}

fn fixity_at(source: &str, i: usize) -> Option<Fixity> {
    operator_at(&terms(source), i).map(|def| def.fixity)
}

#[test]
fn test_table_has_one_entry_per_symbol_and_fixity() {
    for (i, a) in OPERATORS.iter().enumerate() {
        for b in &OPERATORS[i + 1..] {
            assert!(
                a.symbol != b.symbol || a.fixity != b.fixity,
                "duplicate operator `{}`",
                a.symbol
            );
        }
    }
}

#[test]
fn test_priorities_follow_binding_strength() {
    let priority = |symbol, fixity| {
        OPERATORS
            .iter()
            .find(|def| def.symbol == symbol && def.fixity == fixity)
            .map(|def| def.priority)
            .unwrap()
    };
    let chain = [
        priority(Symbol::StarStar, Fixity::Infix),
        priority(Symbol::Minus, Fixity::Prefix),
        priority(Symbol::Star, Fixity::Infix),
        priority(Symbol::Plus, Fixity::Infix),
        priority(Symbol::Lt, Fixity::Infix),
        priority(Symbol::EqEq, Fixity::Infix),
        priority(Symbol::Amp, Fixity::Infix),
        priority(Symbol::Caret, Fixity::Infix),
        priority(Symbol::Pipe, Fixity::Infix),
        priority(Symbol::AmpAmp, Fixity::Infix),
        priority(Symbol::PipePipe, Fixity::Infix),
        priority(Symbol::Eq, Fixity::Infix),
    ];
    assert!(chain.windows(2).all(|pair| pair[0] < pair[1]), "{chain:?}");
}

#[test]
fn test_sign_fixity() {
    assert_eq!(fixity_at("- 1", 0), Some(Fixity::Prefix));
    assert_eq!(fixity_at("1 - 1", 1), Some(Fixity::Infix));
    assert_eq!(fixity_at("1 * - 1", 2), Some(Fixity::Prefix));
    assert_eq!(fixity_at("1 + + 1", 1), Some(Fixity::Infix));
    assert_eq!(fixity_at("1 + + 1", 2), Some(Fixity::Prefix));
}

#[test]
fn test_bang_and_hash_are_always_prefix() {
    assert_eq!(fixity_at("!x", 0), Some(Fixity::Prefix));
    assert_eq!(fixity_at("x ! y", 1), Some(Fixity::Prefix));
    assert_eq!(fixity_at("#x", 0), Some(Fixity::Prefix));
}

#[test]
fn test_non_operators() {
    assert_eq!(fixity_at("1", 0), None);
    assert_eq!(fixity_at("a . b", 1), None);
    assert_eq!(fixity_at("a $ b", 1), None);
    assert_eq!(fixity_at("1", 4), None);
}

#[test]
fn test_to_int32() {
    assert_eq!(to_int32(0.0), 0);
    assert_eq!(to_int32(-1.0), -1);
    assert_eq!(to_int32(1.9), 1);
    assert_eq!(to_int32(-1.9), -1);
    assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
    assert_eq!(to_int32(4_294_967_296.0), 0);
    assert_eq!(to_int32(4_294_967_297.0), 1);
    assert_eq!(to_int32(f64::NAN), 0);
    assert_eq!(to_int32(f64::INFINITY), 0);
    assert_eq!(to_int32(f64::NEG_INFINITY), 0);
}

proptest! {
    #[test]
    fn prop_to_int32_is_identity_on_i32(n in any::<i32>()) {
        prop_assert_eq!(to_int32(f64::from(n)), n);
    }

    #[test]
    fn prop_to_int32_wraps_like_integers(n in any::<i64>()) {
        // Every i64 in this range is exactly representable.
        let n = n >> 12;
        prop_assert_eq!(to_int32(n as f64), n as i32);
    }
}
