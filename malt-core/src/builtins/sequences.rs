// malt-core - Sequence built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lists and vectors: list, vector, vec, count, first, rest, nth, cons,
//! concat, conj, seq and their predicates.

use malt_parser::{MaltVal, Vector};

use crate::error::{AritySpec, Error, Result, check_arity};

use super::{int_arg, seq_arg, seq_or_nil};

// ============================================================================
// Constructors
// ============================================================================

pub(crate) fn builtin_list(args: &[MaltVal]) -> Result<MaltVal> {
    Ok(MaltVal::list(args.to_vec()))
}

pub(crate) fn builtin_vector(args: &[MaltVal]) -> Result<MaltVal> {
    Ok(MaltVal::vector(args.to_vec()))
}

/// (vec coll) - a vector with the elements of a list or vector
pub(crate) fn builtin_vec(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("vec", AritySpec::Exact(1), args)?;
    match &args[0] {
        MaltVal::Vector(..) => Ok(args[0].clone()),
        other => Ok(MaltVal::vector_from(seq_arg("vec", other)?.clone())),
    }
}

// ============================================================================
// Predicates
// ============================================================================

pub(crate) fn builtin_list_p(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("list?", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(matches!(args[0], MaltVal::List(..))))
}

pub(crate) fn builtin_vector_p(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("vector?", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(matches!(args[0], MaltVal::Vector(..))))
}

pub(crate) fn builtin_sequential_p(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("sequential?", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(args[0].as_seq().is_some()))
}

pub(crate) fn builtin_empty_p(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("empty?", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(seq_arg("empty?", &args[0])?.is_empty()))
}

// ============================================================================
// Accessors
// ============================================================================

/// (count coll) - nil counts as empty
pub(crate) fn builtin_count(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("count", AritySpec::Exact(1), args)?;
    let len = seq_or_nil("count", &args[0])?.len();
    Ok(MaltVal::int(len as i64))
}

/// (first coll) - nil for nil or an empty collection
pub(crate) fn builtin_first(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("first", AritySpec::Exact(1), args)?;
    Ok(seq_or_nil("first", &args[0])?
        .front()
        .cloned()
        .unwrap_or(MaltVal::Nil))
}

/// (rest coll) - always a list, empty for nil or an empty collection
pub(crate) fn builtin_rest(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("rest", AritySpec::Exact(1), args)?;
    let items = seq_or_nil("rest", &args[0])?;
    if items.is_empty() {
        return Ok(MaltVal::empty_list());
    }
    Ok(MaltVal::list_from(items.skip(1)))
}

/// (nth coll index)
pub(crate) fn builtin_nth(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("nth", AritySpec::Exact(2), args)?;
    let items = seq_arg("nth", &args[0])?;
    let index = int_arg("nth", &args[1])?;
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .cloned()
        .ok_or(Error::OutOfBounds {
            index,
            length: items.len(),
        })
}

// ============================================================================
// Building
// ============================================================================

/// (cons x coll) - a new list with x in front
pub(crate) fn builtin_cons(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("cons", AritySpec::Exact(2), args)?;
    let mut items = seq_or_nil("cons", &args[1])?;
    items.push_front(args[0].clone());
    Ok(MaltVal::list_from(items))
}

/// (concat & colls) - one list of all elements in order
pub(crate) fn builtin_concat(args: &[MaltVal]) -> Result<MaltVal> {
    let mut out = Vector::new();
    for arg in args {
        out.append(seq_or_nil("concat", arg)?);
    }
    Ok(MaltVal::list_from(out))
}

/// (conj coll & xs) - lists grow at the front, vectors at the back
pub(crate) fn builtin_conj(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("conj", AritySpec::AtLeast(1), args)?;
    let extra = &args[1..];
    match &args[0] {
        MaltVal::List(items, _) => {
            let mut out = items.clone();
            for x in extra {
                out.push_front(x.clone());
            }
            Ok(MaltVal::list_from(out))
        }
        MaltVal::Vector(items, _) => {
            let mut out = items.clone();
            out.extend(extra.iter().cloned());
            Ok(MaltVal::vector_from(out))
        }
        other => Err(Error::type_error("conj", "list or vector", other.type_name())),
    }
}

/// (seq x) - a list view of x, or nil when empty
///
/// Strings become a list of one-character strings.
pub(crate) fn builtin_seq(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("seq", AritySpec::Exact(1), args)?;
    match &args[0] {
        MaltVal::Nil => Ok(MaltVal::Nil),
        MaltVal::String(s) if s.is_empty() => Ok(MaltVal::Nil),
        MaltVal::String(s) => Ok(MaltVal::list(
            s.chars().map(|c| MaltVal::string(c.to_string())).collect(),
        )),
        MaltVal::List(items, _) | MaltVal::Vector(items, _) if items.is_empty() => {
            Ok(MaltVal::Nil)
        }
        MaltVal::List(..) => Ok(args[0].clone()),
        MaltVal::Vector(items, _) => Ok(MaltVal::list_from(items.clone())),
        other => Err(Error::type_error(
            "seq",
            "list, vector or string",
            other.type_name(),
        )),
    }
}
