// malt-core - Error types for the malt evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for malt evaluation.

use std::fmt;

use malt_parser::{MaltVal, ParseError, Symbol, pr_str};

/// Result type for malt evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Malformed source text
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Unbound symbol reference
    #[error("Symbol '{0}' not found")]
    NotFound(Symbol),
    /// Wrong number of arguments to a function or special form
    #[error("Invalid number of arguments to '{name}', expected {expected}, got {got}")]
    Arity {
        name: String,
        expected: AritySpec,
        got: usize,
    },
    /// Wrong type for an operation
    #[error("{context}: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: String,
    },
    /// Malformed special form
    #[error("Invalid '{form}' syntax: {message}")]
    InvalidSyntax { form: &'static str, message: String },
    /// Any other bad argument
    #[error("{0}")]
    InvalidArgument(String),
    /// Applying something that is not a function
    #[error("{0}")]
    Evaluation(String),
    /// File missing, unreadable or too large
    #[error("{0}")]
    Io(String),
    #[error("Index {index} out of bounds for length {length}")]
    OutOfBounds { index: i64, length: usize },
    /// Division or modulo by zero
    #[error("{0}")]
    Arithmetic(String),
    /// User-thrown value (via throw)
    #[error("{}", pr_str(.0, true))]
    Thrown(MaltVal),
}

/// Specification for expected arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
    Range(usize, usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
            AritySpec::Range(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

impl AritySpec {
    pub fn accepts(&self, n: usize) -> bool {
        match *self {
            AritySpec::Exact(e) => n == e,
            AritySpec::AtLeast(min) => n >= min,
            AritySpec::Range(min, max) => (min..=max).contains(&n),
        }
    }
}

impl Error {
    /// Create an arity error for exact arity with function name.
    pub fn arity(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::Arity {
            name: name.into(),
            expected: AritySpec::Exact(expected),
            got,
        }
    }

    /// Create an arity error from an arbitrary spec.
    pub fn arity_spec(name: impl Into<String>, expected: AritySpec, got: usize) -> Self {
        Error::Arity {
            name: name.into(),
            expected,
            got,
        }
    }

    /// Create a type error with context.
    pub fn type_error(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: context.into(),
        }
    }

    /// Create an invalid syntax error.
    pub fn syntax(form: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidSyntax {
            form,
            message: message.into(),
        }
    }

    pub fn not_a_function(val: &MaltVal) -> Self {
        Error::Evaluation(format!("{} is not a function", pr_str(val, true)))
    }

    /// Name of the error kind as seen by `catch*`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::Parse(_) => "ParseError",
            Error::NotFound(_) => "NotFoundError",
            Error::Arity { .. }
            | Error::TypeError { .. }
            | Error::InvalidSyntax { .. }
            | Error::InvalidArgument(_) => "InvalidArgumentError",
            Error::Evaluation(_) => "EvaluationError",
            Error::Io(_) => "IOError",
            Error::OutOfBounds { .. } => "OutOfBoundsError",
            Error::Arithmetic(_) => "ArithmeticError",
            Error::Thrown(_) => "UserException",
        }
    }
}

/// Check the argument count of a builtin.
pub fn check_arity(name: &str, spec: AritySpec, args: &[MaltVal]) -> Result<()> {
    if spec.accepts(args.len()) {
        Ok(())
    } else {
        Err(Error::arity_spec(name, spec, args.len()))
    }
}

// ============================================================================
// Tests
// ============================================================================
