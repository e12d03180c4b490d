// malt-core - Comparison built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison operations: =, <, >, <=, >=, not

use std::cmp::Ordering;

use malt_parser::MaltVal;

use crate::error::{AritySpec, Result, check_arity};

use super::int_arg;

// ============================================================================
// Equality
// ============================================================================

pub(crate) fn builtin_eq(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("=", AritySpec::AtLeast(1), args)?;
    Ok(MaltVal::bool(args.windows(2).all(|w| w[0] == w[1])))
}

pub(crate) fn builtin_not(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("not", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(!args[0].is_truthy()))
}

// ============================================================================
// Ordering
// ============================================================================

/// True when every adjacent pair of integers satisfies `accept`.
fn compare_chain(
    name: &'static str,
    args: &[MaltVal],
    accept: fn(Ordering) -> bool,
) -> Result<MaltVal> {
    check_arity(name, AritySpec::AtLeast(1), args)?;
    let nums = args
        .iter()
        .map(|a| int_arg(name, a))
        .collect::<Result<Vec<i64>>>()?;
    Ok(MaltVal::bool(
        nums.windows(2).all(|w| accept(w[0].cmp(&w[1]))),
    ))
}

pub(crate) fn builtin_lt(args: &[MaltVal]) -> Result<MaltVal> {
    compare_chain("<", args, Ordering::is_lt)
}

pub(crate) fn builtin_le(args: &[MaltVal]) -> Result<MaltVal> {
    compare_chain("<=", args, Ordering::is_le)
}

pub(crate) fn builtin_gt(args: &[MaltVal]) -> Result<MaltVal> {
    compare_chain(">", args, Ordering::is_gt)
}

pub(crate) fn builtin_ge(args: &[MaltVal]) -> Result<MaltVal> {
    compare_chain(">=", args, Ordering::is_ge)
}
