// malt-core - Atom built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Atoms: atom, atom?, deref, reset!, swap!

use malt_parser::MaltVal;

use crate::error::{AritySpec, Result, check_arity};
use crate::eval::apply;

use super::{atom_arg, fn_arg};

/// (atom x) - Create an atom with initial value x
pub(crate) fn builtin_atom(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("atom", AritySpec::Exact(1), args)?;
    Ok(MaltVal::atom(args[0].clone()))
}

pub(crate) fn builtin_atom_p(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("atom?", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(matches!(args[0], MaltVal::Atom(_))))
}

/// (deref a) - current value of an atom
pub(crate) fn builtin_deref(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("deref", AritySpec::Exact(1), args)?;
    Ok(atom_arg("deref", &args[0])?.deref())
}

/// (reset! a x) - set the value, returning it
pub(crate) fn builtin_reset(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("reset!", AritySpec::Exact(2), args)?;
    Ok(atom_arg("reset!", &args[0])?.reset(args[1].clone()))
}

/// (swap! a f & args) - set the value to (f current args...)
///
/// The function runs before the atom is written, so it may itself read the
/// atom.
pub(crate) fn builtin_swap(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("swap!", AritySpec::AtLeast(2), args)?;
    let atom = atom_arg("swap!", &args[0])?;
    let func = fn_arg("swap!", &args[1])?;

    let mut call_args = Vec::with_capacity(args.len() - 1);
    call_args.push(atom.deref());
    call_args.extend(args[2..].iter().cloned());

    let new_val = apply(func, &call_args)?;
    Ok(atom.reset(new_val))
}
