// malt-core - Tail call integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Deep tail recursion must run in constant host stack.

mod common;

use common::{MaltVal, eval_str};

#[test]
fn test_self_tail_call() {
    assert_eval!(
        "(def! countdown (fn* (n) (if (= n 0) :done (countdown (- n 1)))))
         (countdown 100000)",
        MaltVal::keyword("done")
    );
}

#[test]
fn test_tail_call_through_do_and_let() {
    assert_eval!(
        "(def! sum-to (fn* (n acc)
           (if (= n 0)
             acc
             (let* (m (- n 1))
               (do (sum-to m (+ acc n)))))))
         (sum-to 100000 0)",
        MaltVal::int(5_000_050_000)
    );
}

#[test]
fn test_mutual_tail_calls() {
    assert_eval!(
        "(def! even? (fn* (n) (if (= n 0) true (odd? (- n 1)))))
         (def! odd? (fn* (n) (if (= n 0) false (even? (- n 1)))))
         (even? 100001)",
        MaltVal::bool(false)
    );
}

#[test]
fn test_tail_call_from_catch_handler() {
    assert_eval!(
        "(def! loop (fn* (n) (if (= n 0) 0 (try* (throw n) (catch* e (loop (- n 1)))))))
         (loop 100)",
        MaltVal::int(0)
    );
}
