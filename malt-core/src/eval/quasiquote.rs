// malt-core - Quasiquote expansion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Rewrites a quasiquoted template into code that rebuilds it.
//!
//! Sequences fold from the last element to the first into a chain of
//! `cons`/`concat` calls, so the evaluated result keeps the original
//! left-to-right order. Vectors wrap the chain in `vec`.

use malt_parser::{MaltVal, Vector};

use crate::error::{Error, Result};

/// The argument of `(name x)`, if `form` is a list headed by `name`.
/// Any other argument count is an arity error.
fn tagged(form: &MaltVal, name: &str) -> Result<Option<MaltVal>> {
    match form {
        MaltVal::List(items, _) if items.front().is_some_and(|h| h.is_symbol_named(name)) => {
            if items.len() != 2 {
                return Err(Error::arity(name, 1, items.len() - 1));
            }
            Ok(Some(items[1].clone()))
        }
        _ => Ok(None),
    }
}

/// Expand a quasiquoted form.
pub fn quasiquote(ast: &MaltVal) -> Result<MaltVal> {
    if let Some(inner) = tagged(ast, "unquote")? {
        return Ok(inner);
    }
    Ok(match ast {
        MaltVal::List(items, _) => fold_elements(items)?,
        MaltVal::Vector(items, _) => {
            MaltVal::list(vec![MaltVal::symbol("vec"), fold_elements(items)?])
        }
        MaltVal::Map(..) | MaltVal::Symbol(_) => {
            MaltVal::list(vec![MaltVal::symbol("quote"), ast.clone()])
        }
        _ => ast.clone(),
    })
}

fn fold_elements(items: &Vector<MaltVal>) -> Result<MaltVal> {
    items.iter().rev().try_fold(MaltVal::empty_list(), |acc, elt| {
        Ok(match tagged(elt, "splice-unquote")? {
            Some(spliced) => MaltVal::list(vec![MaltVal::symbol("concat"), spliced, acc]),
            None => MaltVal::list(vec![MaltVal::symbol("cons"), quasiquote(elt)?, acc]),
        })
    })
}

// ============================================================================
// Tests
// ============================================================================
