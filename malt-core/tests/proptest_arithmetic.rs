// malt-core - Property-based tests for integer arithmetic
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for integer arithmetic and comparison.
//!
//! Tests the following properties:
//! - Operators agree with checked i64 arithmetic
//! - Overflow is an error rather than a wrapped result
//! - Division and remainder satisfy a = (a / b) * b + (a % b)
//! - Comparison chains agree with slice ordering

mod common;

use common::{MaltVal, eval_all, eval_str, new_interpreter};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Integers that won't overflow on basic operations
fn arb_small_int() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

fn arb_nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..1_000_000, -1_000_000i64..=-1]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn add_matches_host(a in arb_small_int(), b in arb_small_int(), c in arb_small_int()) {
        let result = eval_str(&format!("(+ {} {} {})", a, b, c)).unwrap();
        prop_assert_eq!(result, MaltVal::int(a + b + c));
    }

    #[test]
    fn sub_and_mul_fold_left(a in arb_small_int(), b in arb_small_int()) {
        let malt = new_interpreter();
        prop_assert_eq!(
            eval_all(&format!("(- {} {} {})", a, b, b), &malt).unwrap(),
            MaltVal::int(a - b - b)
        );
        prop_assert_eq!(
            eval_all(&format!("(* {} {})", a, b), &malt).unwrap(),
            MaltVal::int(a * b)
        );
    }

    #[test]
    fn div_rem_identity(a in arb_small_int(), b in arb_nonzero()) {
        let src = format!("(+ (* (/ {a} {b}) {b}) (% {a} {b}))", a = a, b = b);
        prop_assert_eq!(eval_str(&src).unwrap(), MaltVal::int(a));
    }

    #[test]
    fn overflow_is_an_error(a in (i64::MAX / 2 + 1)..i64::MAX) {
        let err = eval_str(&format!("(+ {} {})", a, a)).unwrap_err();
        prop_assert!(err.contains("overflow"), "unexpected error: {}", err);
    }

    #[test]
    fn comparison_chain_agrees_with_sorting(xs in prop::collection::vec(arb_small_int(), 1..6)) {
        let args = xs.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" ");
        let ascending = xs.windows(2).all(|w| w[0] < w[1]);
        prop_assert_eq!(
            eval_str(&format!("(< {})", args)).unwrap(),
            MaltVal::bool(ascending)
        );
    }
}

#[test]
fn test_division_by_zero() {
    assert_eval_err_contains!("(/ 1 0)", "Division by zero");
    assert_eval_err_contains!("(% 1 0)", "Division by zero");
}
