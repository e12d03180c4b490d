// malt-core - Macro integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for defmacro!, macroexpand and the cond macro.

mod common;

use common::{MaltVal, eval_all, eval_str, new_interpreter};

#[test]
fn test_zero_argument_macro() {
    assert_eval!("(defmacro! one (fn* () 1)) (one)", MaltVal::int(1));
    assert_eval!("(defmacro! m (fn* () 1337)) (m)", MaltVal::int(1337));
}

#[test]
fn test_macro_receives_unevaluated_arguments() {
    assert_eval!(
        "(defmacro! unless (fn* (pred a b) `(if ~pred ~b ~a)))
         (unless false 7 8)",
        MaltVal::int(7)
    );
    assert_eval!(
        "(defmacro! ignore (fn* (x) nil)) (ignore (this-would-fail))",
        MaltVal::Nil
    );
}

#[test]
fn test_macroexpand_does_not_evaluate() {
    assert_eval!("(defmacro! m (fn* () 1337)) (macroexpand (m))", MaltVal::int(1337));
    assert_prints!(
        "(defmacro! unless (fn* (pred a b) `(if ~pred ~b ~a)))
         (macroexpand (unless PRED A B))",
        "(if PRED B A)"
    );
}

#[test]
fn test_expansion_reaches_fixpoint() {
    assert_prints!(
        "(defmacro! inner (fn* (x) `(+ ~x 1)))
         (defmacro! outer (fn* (x) `(inner ~x)))
         (macroexpand (outer 2))",
        "(+ 2 1)"
    );
}

#[test]
fn test_macroexpand_of_non_macro_is_identity() {
    assert_prints!("(macroexpand (+ 1 2))", "(+ 1 2)");
    assert_prints!("(macroexpand (unbound 1))", "(unbound 1)");
}

#[test]
fn test_macro_predicates() {
    let malt = new_interpreter();
    eval_all("(defmacro! m (fn* () 1)) (def! f (fn* () 1))", &malt).unwrap();
    assert_eq!(eval_all("(macro? m)", &malt).unwrap(), MaltVal::bool(true));
    assert_eq!(eval_all("(fn? m)", &malt).unwrap(), MaltVal::bool(false));
    assert_eq!(eval_all("(macro? f)", &malt).unwrap(), MaltVal::bool(false));
    // defmacro! flags a copy, the original function is unchanged
    eval_all("(defmacro! g f)", &malt).unwrap();
    assert_eq!(eval_all("(macro? f)", &malt).unwrap(), MaltVal::bool(false));
}

#[test]
fn test_cond() {
    assert_eval!("(cond)", MaltVal::Nil);
    assert_eval!("(cond (= 1 2) :a (= 1 1) :b)", MaltVal::keyword("b"));
    assert_eval!("(cond false :a)", MaltVal::Nil);
    assert_eval_err_contains!("(cond true)", "odd number of forms to cond");
}

#[test]
fn test_macro_shadowed_in_let_is_a_function_call() {
    assert_eval!(
        "(defmacro! m (fn* () 1))
         (let* (m (fn* () 2)) (m))",
        MaltVal::int(2)
    );
}
