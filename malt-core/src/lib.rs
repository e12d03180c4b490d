// malt-core - Runtime and evaluator for the malt language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # malt-core
//!
//! Runtime and evaluator for malt, a small Lisp.
//! Provides a trampolined interpreter for `MaltVal` forms, the primitive
//! table and a session type tying them to line-oriented I/O.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod io;

pub use builtins::{register_builtins, register_console_builtins};
pub use env::{Env, WeakEnv};
pub use error::{AritySpec, Error, Result};
pub use eval::{apply, eval, macroexpand, make_native_fn, quasiquote};
pub use interpreter::{Interpreter, InterpreterConfig};
pub use io::{CapturedOutput, Console, Input, Output, ScriptedInput, StdInput, StdOutput};

// Re-export parser types for convenience
pub use malt_parser::{Keyword, MaltVal, Symbol};
