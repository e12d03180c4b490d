// malt-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers and utilities for malt integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`eval_str`] - Evaluate code in a fresh interpreter
//! - [`eval_all`] - Evaluate code in an existing interpreter
//! - [`eval_str_with_env`] - Evaluate code in a bare environment
//! - [`new_interpreter`] - Create an interpreter with bootstrap definitions
//! - [`new_env`] - Create an environment with only the pure builtins
//! - [`capturing_interpreter`] - An interpreter whose output is recorded
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code evaluates to an expected value
//! - [`assert_eval_err!`] - Assert that code produces an error
//! - [`assert_eval_err_contains!`] - Assert the error message contains a pattern
//! - [`assert_prints!`] - Assert that code evaluates to the given printed form

use std::rc::Rc;

// Re-export common types for convenience
pub use malt_core::builtins::register_builtins;
pub use malt_core::env::Env;
pub use malt_core::eval::eval;
#[allow(unused_imports)]
pub use malt_core::{
    CapturedOutput, Error, Interpreter, InterpreterConfig, ScriptedInput, Symbol,
};
#[allow(unused_imports)]
pub use malt_parser::{Keyword, MaltVal, read_all, read_str};

/// Create an interpreter with bootstrap definitions and silent I/O.
#[must_use]
pub fn new_interpreter() -> Interpreter {
    Interpreter::new(
        InterpreterConfig::default(),
        Rc::new(ScriptedInput::default()),
        Rc::new(CapturedOutput::new()),
    )
    .expect("bootstrap should load")
}

/// Create an interpreter whose printed output is recorded, reading `lines`.
#[must_use]
#[allow(dead_code)]
pub fn capturing_interpreter(lines: &[&str]) -> (Interpreter, Rc<CapturedOutput>) {
    let out = Rc::new(CapturedOutput::new());
    let input = Rc::new(ScriptedInput::new(lines.iter().copied()));
    let interp = Interpreter::new(InterpreterConfig::default(), input, out.clone())
        .expect("bootstrap should load");
    (interp, out)
}

/// Evaluate every form in `s` in a fresh interpreter, returning the last.
///
/// # Returns
///
/// Returns the evaluated value, or an error message string.
#[must_use]
pub fn eval_str(s: &str) -> Result<MaltVal, String> {
    eval_all(s, &new_interpreter())
}

/// Evaluate every form in `s` in the given interpreter, returning the last.
#[must_use]
pub fn eval_all(s: &str, interp: &Interpreter) -> Result<MaltVal, String> {
    interp.eval_str(s).map_err(|e| e.to_string())
}

/// Evaluate a single form in a bare environment.
#[must_use]
#[allow(dead_code)]
pub fn eval_str_with_env(s: &str, env: &Env) -> Result<MaltVal, String> {
    let form = read_str(s).map_err(|e| e.to_string())?;
    eval(&form, env).map_err(|e| e.to_string())
}

/// Create a new environment with the pure builtins registered.
#[must_use]
#[allow(dead_code)]
pub fn new_env() -> Env {
    let env = Env::new();
    register_builtins(&env);
    env
}

/// Parse a single form, panicking on malformed input.
#[must_use]
#[allow(dead_code)]
pub fn read(s: &str) -> MaltVal {
    read_str(s).expect("test input should parse")
}

/// Assert that evaluating `input` produces the expected value.
///
/// # Example
///
/// ```ignore
/// assert_eval!("(+ 1 2)", MaltVal::int(3));
/// ```
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error.
///
/// # Example
///
/// ```ignore
/// assert_eval_err!("(+ 1 :not-a-number)");
/// ```
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
    };
}

/// Assert that evaluating `input` produces an error matching the given pattern.
///
/// # Example
///
/// ```ignore
/// assert_eval_err_contains!("(/ 1 0)", "division by zero");
/// ```
#[macro_export]
macro_rules! assert_eval_err_contains {
    ($input:expr, $pattern:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
        let err_msg = result.unwrap_err();
        assert!(
            err_msg.to_lowercase().contains(&$pattern.to_lowercase()),
            "Error message '{}' does not contain '{}'",
            err_msg,
            $pattern
        );
    };
}

/// Assert that evaluating `input` prints readably as `expected`.
///
/// # Example
///
/// ```ignore
/// assert_prints!("(list 1 \"a\")", "(1 \"a\")");
/// ```
#[macro_export]
macro_rules! assert_prints {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            malt_parser::pr_str(&result.unwrap(), true),
            $expected,
            "Printed form of '{}' did not match expected",
            $input
        );
    };
}
