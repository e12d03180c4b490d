// malt-core - Higher-order built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Higher-order functions: apply, map

use malt_parser::MaltVal;

use crate::error::{AritySpec, Result, check_arity};
use crate::eval::apply;

use super::{fn_arg, seq_arg};

/// (apply f args) or (apply f a b c args) - apply function to arguments
pub(crate) fn builtin_apply(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("apply", AritySpec::AtLeast(2), args)?;
    let func = fn_arg("apply", &args[0])?;

    // Intermediate arguments, then the spread of the final sequence
    let middle = &args[1..args.len() - 1];
    let mut all_args = middle.to_vec();
    all_args.extend(seq_arg("apply", &args[args.len() - 1])?.iter().cloned());

    apply(func, &all_args)
}

/// (map f coll) - a list of f applied to each element
pub(crate) fn builtin_map(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("map", AritySpec::Exact(2), args)?;
    let func = fn_arg("map", &args[0])?;
    let result = seq_arg("map", &args[1])?
        .iter()
        .map(|item| apply(func, std::slice::from_ref(item)))
        .collect::<Result<Vec<_>>>()?;
    Ok(MaltVal::list(result))
}
