// malt-core - Arithmetic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic operations: +, -, *, /, %
//!
//! ## Integer Overflow Behaviour
//!
//! Only fixed-width integers exist. All operations are checked: overflow is
//! an `ArithmeticError` rather than a silent wrap.

use malt_parser::MaltVal;

use crate::error::{AritySpec, Error, Result, check_arity};

use super::int_arg;

fn overflow(name: &str) -> Error {
    Error::Arithmetic(format!("Integer overflow in '{}'", name))
}

fn division_by_zero() -> Error {
    Error::Arithmetic("Division by zero".to_string())
}

/// Left fold over integer arguments starting from the first.
fn fold_ints(
    name: &'static str,
    args: &[MaltVal],
    op: impl Fn(i64, i64) -> Result<i64>,
) -> Result<MaltVal> {
    check_arity(name, AritySpec::AtLeast(1), args)?;
    let mut acc = int_arg(name, &args[0])?;
    for arg in &args[1..] {
        acc = op(acc, int_arg(name, arg)?)?;
    }
    Ok(MaltVal::int(acc))
}

pub(crate) fn builtin_add(args: &[MaltVal]) -> Result<MaltVal> {
    if args.is_empty() {
        return Ok(MaltVal::int(0));
    }
    fold_ints("+", args, |a, b| a.checked_add(b).ok_or_else(|| overflow("+")))
}

pub(crate) fn builtin_sub(args: &[MaltVal]) -> Result<MaltVal> {
    fold_ints("-", args, |a, b| a.checked_sub(b).ok_or_else(|| overflow("-")))
}

pub(crate) fn builtin_mul(args: &[MaltVal]) -> Result<MaltVal> {
    if args.is_empty() {
        return Ok(MaltVal::int(1));
    }
    fold_ints("*", args, |a, b| a.checked_mul(b).ok_or_else(|| overflow("*")))
}

/// Integer division, truncating toward zero.
pub(crate) fn builtin_div(args: &[MaltVal]) -> Result<MaltVal> {
    fold_ints("/", args, |a, b| {
        if b == 0 {
            return Err(division_by_zero());
        }
        a.checked_div(b).ok_or_else(|| overflow("/"))
    })
}

/// Remainder with the sign of the dividend.
pub(crate) fn builtin_mod(args: &[MaltVal]) -> Result<MaltVal> {
    fold_ints("%", args, |a, b| {
        if b == 0 {
            return Err(division_by_zero());
        }
        a.checked_rem(b).ok_or_else(|| overflow("%"))
    })
}
