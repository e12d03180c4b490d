// malt-core - Collection integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for list, vector and map primitives called from malt.

mod common;

use common::{MaltVal, eval_str};

// =============================================================================
// Equality
// =============================================================================

#[test]
fn test_list_vector_cross_equality() {
    assert_eval!("(= (list 1 2) [1 2])", MaltVal::bool(true));
    assert_eval!("(= [1 [2]] '(1 (2)))", MaltVal::bool(true));
    assert_eval!("(= (list 1 2) [1 2 3])", MaltVal::bool(false));
    assert_eval!("(= {:a [1]} {:a '(1)})", MaltVal::bool(true));
    assert_eval!("(= {:a 1} {:a 1 :b 2})", MaltVal::bool(false));
    assert_eval!("(= :a \"a\")", MaltVal::bool(false));
    assert_eval!("(= 'a 'a)", MaltVal::bool(true));
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_sequence_basics() {
    assert_eval!("(count [1 2 3])", MaltVal::int(3));
    assert_eval!("(count nil)", MaltVal::int(0));
    assert_eval!("(first '())", MaltVal::Nil);
    assert_prints!("(rest [1 2 3])", "(2 3)");
    assert_prints!("(rest nil)", "()");
    assert_eval!("(nth '(5 6 7) 2)", MaltVal::int(7));
    assert_eval!("(empty? [])", MaltVal::bool(true));
}

#[test]
fn test_building() {
    assert_prints!("(cons 1 [2 3])", "(1 2 3)");
    assert_prints!("(concat [1] '(2) [] (list 3 4))", "(1 2 3 4)");
    assert_prints!("(conj '(1 2) 3 4)", "(4 3 1 2)");
    assert_prints!("(conj [1 2] 3 4)", "[1 2 3 4]");
    assert_prints!("(vec '(1 2))", "[1 2]");
    assert_prints!("(seq \"hey\")", "(\"h\" \"e\" \"y\")");
    assert_eval!("(seq [])", MaltVal::Nil);
}

#[test]
fn test_apply_and_map() {
    assert_eval!("(apply + 1 2 [3 4])", MaltVal::int(10));
    assert_eval!("(apply (fn* (& xs) (count xs)) '())", MaltVal::int(0));
    assert_prints!("(map (fn* (x) (* x x)) [1 2 3])", "(1 4 9)");
    assert_prints!("(map list '(1 2))", "((1) (2))");
}

#[test]
fn test_sequence_errors() {
    assert_eval_err_contains!("(nth [1 2] 2)", "out of bounds");
    assert_eval_err!("(first 1)");
    assert_eval_err!("(cons 1 2)");
    assert_eval_err!("(conj {} 1)");
}

// =============================================================================
// Maps
// =============================================================================

#[test]
fn test_map_operations() {
    assert_prints!("(hash-map :a 1 :b 2)", "{:a 1 :b 2}");
    assert_prints!("(assoc {:a 1} :b 2 :a 3)", "{:a 3 :b 2}");
    assert_prints!("(dissoc {:a 1 :b 2} :a)", "{:b 2}");
    assert_eval!("(get {:a 1} :a)", MaltVal::int(1));
    assert_eval!("(get {:a 1} :z)", MaltVal::Nil);
    assert_eval!("(get nil :a)", MaltVal::Nil);
    assert_eval!("(contains? {\"k\" nil} \"k\")", MaltVal::bool(true));
    assert_prints!("(keys {:a 1 :b 2})", "(:a :b)");
    assert_prints!("(vals {:a 1 :b 2})", "(1 2)");
    assert_eval!("(map? {})", MaltVal::bool(true));
}

#[test]
fn test_map_keys_by_value() {
    assert_eval!("(get {[1 2] :v} '(1 2))", MaltVal::keyword("v"));
    assert_eval!("(get (assoc {} (list 1) :x) [1])", MaltVal::keyword("x"));
}

#[test]
fn test_map_literal_evaluates_values_only() {
    assert_prints!("(let* (a 1) {a 2})", "{a 2}");
    assert_prints!("(let* (a 1) {:k a})", "{:k 1}");
    assert_prints!("{unbound 1}", "{unbound 1}");
    assert_eval_err!("{:k unbound}");
}

#[test]
fn test_map_errors() {
    assert_eval_err!("(hash-map :a)");
    assert_eval_err!("(assoc [1] 0 1)");
}

// =============================================================================
// Predicates and conversion
// =============================================================================

#[test]
fn test_predicates() {
    assert_eval!("(list? '(1))", MaltVal::bool(true));
    assert_eval!("(list? [1])", MaltVal::bool(false));
    assert_eval!("(vector? [1])", MaltVal::bool(true));
    assert_eval!("(sequential? '())", MaltVal::bool(true));
    assert_eval!("(nil? nil)", MaltVal::bool(true));
    assert_eval!("(true? true)", MaltVal::bool(true));
    assert_eval!("(false? nil)", MaltVal::bool(false));
    assert_eval!("(symbol? 'a)", MaltVal::bool(true));
    assert_eval!("(keyword? :a)", MaltVal::bool(true));
    assert_eval!("(number? 1)", MaltVal::bool(true));
    assert_eval!("(string? \"a\")", MaltVal::bool(true));
    assert_eval!("(fn? +)", MaltVal::bool(true));
    assert_eval!("(fn? (fn* () 1))", MaltVal::bool(true));
    assert_eval!("(not nil)", MaltVal::bool(true));
}

#[test]
fn test_conversion() {
    assert_eval!("(symbol \"abc\")", MaltVal::symbol("abc"));
    assert_eval!("(keyword \"abc\")", MaltVal::keyword("abc"));
    assert_eval!("(= (keyword \"a\") :a)", MaltVal::bool(true));
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn test_str_and_pr_str() {
    assert_eval!("(str \"a\" 1 :k nil)", MaltVal::string("a1:knil"));
    assert_eval!("(pr-str \"a\" 1)", MaltVal::string("\"a\" 1"));
    assert_eval!("(str)", MaltVal::string(""));
    assert_eval!("(str [1 \"x\"])", MaltVal::string("[1 x]"));
}
