// malt-core - Metadata built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Metadata: meta, with-meta

use malt_parser::MaltVal;

use crate::error::{AritySpec, Error, Result, check_arity};

/// (meta x) - attached metadata or nil
pub(crate) fn builtin_meta(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("meta", AritySpec::Exact(1), args)?;
    Ok(args[0].meta())
}

/// (with-meta x m) - a copy of x carrying m
pub(crate) fn builtin_with_meta(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("with-meta", AritySpec::Exact(2), args)?;
    args[0].with_meta(args[1].clone()).ok_or_else(|| {
        Error::type_error(
            "with-meta",
            "list, vector, map or function",
            args[0].type_name(),
        )
    })
}
