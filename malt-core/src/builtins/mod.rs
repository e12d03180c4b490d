// malt-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for malt.
//!
//! Pure primitives are registered by `register_builtins`. The few that read
//! or write lines close over a `Console` and are registered separately by
//! `register_console_builtins`.

mod arithmetic;
mod atoms;
mod comparison;
mod exceptions;
mod higher_order;
mod io;
mod maps;
mod metadata;
mod predicates;
mod printing;
mod sequences;

use std::rc::Rc;

use malt_parser::{MaltAtom, MaltVal, Vector};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::io::Console;

use arithmetic::{builtin_add, builtin_div, builtin_mod, builtin_mul, builtin_sub};
use atoms::{builtin_atom, builtin_atom_p, builtin_deref, builtin_reset, builtin_swap};
use comparison::{builtin_eq, builtin_ge, builtin_gt, builtin_le, builtin_lt, builtin_not};
use exceptions::builtin_throw;
use higher_order::{builtin_apply, builtin_map};
use io::{builtin_read_string, builtin_readline, builtin_slurp, builtin_time_ms};
use maps::{
    builtin_assoc, builtin_contains_p, builtin_dissoc, builtin_get, builtin_hash_map,
    builtin_keys, builtin_map_p, builtin_vals,
};
use metadata::{builtin_meta, builtin_with_meta};
use predicates::{
    builtin_false_p, builtin_fn_p, builtin_keyword, builtin_keyword_p, builtin_macro_p,
    builtin_nil_p, builtin_number_p, builtin_string_p, builtin_symbol, builtin_symbol_p,
    builtin_true_p,
};
use printing::{builtin_pr_str, builtin_println, builtin_prn, builtin_str};
use sequences::{
    builtin_concat, builtin_conj, builtin_cons, builtin_count, builtin_empty_p, builtin_first,
    builtin_list, builtin_list_p, builtin_nth, builtin_rest, builtin_seq, builtin_sequential_p,
    builtin_vec, builtin_vector, builtin_vector_p,
};

/// Register all pure built-in functions in the given environment.
pub fn register_builtins(env: &Env) {
    // Arithmetic
    env.define_native("+", builtin_add);
    env.define_native("-", builtin_sub);
    env.define_native("*", builtin_mul);
    env.define_native("/", builtin_div);
    env.define_native("%", builtin_mod);

    // Comparison
    env.define_native("=", builtin_eq);
    env.define_native("<", builtin_lt);
    env.define_native("<=", builtin_le);
    env.define_native(">", builtin_gt);
    env.define_native(">=", builtin_ge);
    env.define_native("not", builtin_not);

    // Printing to strings
    env.define_native("pr-str", builtin_pr_str);
    env.define_native("str", builtin_str);

    // Lists and vectors
    env.define_native("list", builtin_list);
    env.define_native("list?", builtin_list_p);
    env.define_native("vector", builtin_vector);
    env.define_native("vector?", builtin_vector_p);
    env.define_native("vec", builtin_vec);
    env.define_native("empty?", builtin_empty_p);
    env.define_native("count", builtin_count);
    env.define_native("first", builtin_first);
    env.define_native("rest", builtin_rest);
    env.define_native("nth", builtin_nth);
    env.define_native("cons", builtin_cons);
    env.define_native("concat", builtin_concat);
    env.define_native("conj", builtin_conj);
    env.define_native("seq", builtin_seq);
    env.define_native("sequential?", builtin_sequential_p);

    // Higher-order
    env.define_native("apply", builtin_apply);
    env.define_native("map", builtin_map);

    // Maps
    env.define_native("hash-map", builtin_hash_map);
    env.define_native("map?", builtin_map_p);
    env.define_native("assoc", builtin_assoc);
    env.define_native("dissoc", builtin_dissoc);
    env.define_native("get", builtin_get);
    env.define_native("contains?", builtin_contains_p);
    env.define_native("keys", builtin_keys);
    env.define_native("vals", builtin_vals);

    // Atoms
    env.define_native("atom", builtin_atom);
    env.define_native("atom?", builtin_atom_p);
    env.define_native("deref", builtin_deref);
    env.define_native("reset!", builtin_reset);
    env.define_native("swap!", builtin_swap);

    // Type predicates and conversion
    env.define_native("nil?", builtin_nil_p);
    env.define_native("true?", builtin_true_p);
    env.define_native("false?", builtin_false_p);
    env.define_native("symbol?", builtin_symbol_p);
    env.define_native("symbol", builtin_symbol);
    env.define_native("keyword?", builtin_keyword_p);
    env.define_native("keyword", builtin_keyword);
    env.define_native("number?", builtin_number_p);
    env.define_native("string?", builtin_string_p);
    env.define_native("fn?", builtin_fn_p);
    env.define_native("macro?", builtin_macro_p);

    // Metadata
    env.define_native("meta", builtin_meta);
    env.define_native("with-meta", builtin_with_meta);

    // Reader and files
    env.define_native("read-string", builtin_read_string);
    env.define_native("slurp", builtin_slurp);
    env.define_native("time-ms", builtin_time_ms);

    // Exceptions
    env.define_native("throw", builtin_throw);
}

/// Register the built-ins that read from or write to the console.
pub fn register_console_builtins(env: &Env, console: &Console) {
    let c = console.clone();
    env.define_native("prn", move |args| builtin_prn(&c, args));
    let c = console.clone();
    env.define_native("println", move |args| builtin_println(&c, args));
    let c = console.clone();
    env.define_native("readline", move |args| builtin_readline(&c, args));
}

// ============================================================================
// Argument helpers
// ============================================================================

pub(crate) fn int_arg(name: &str, val: &MaltVal) -> Result<i64> {
    match val {
        MaltVal::Int(n) => Ok(*n),
        other => Err(Error::type_error(name, "integer", other.type_name())),
    }
}

pub(crate) fn string_arg(name: &str, val: &MaltVal) -> Result<Rc<str>> {
    match val {
        MaltVal::String(s) => Ok(s.clone()),
        other => Err(Error::type_error(name, "string", other.type_name())),
    }
}

pub(crate) fn atom_arg<'a>(name: &str, val: &'a MaltVal) -> Result<&'a MaltAtom> {
    match val {
        MaltVal::Atom(atom) => Ok(atom),
        other => Err(Error::type_error(name, "atom", other.type_name())),
    }
}

/// Elements of a list or vector.
pub(crate) fn seq_arg<'a>(name: &str, val: &'a MaltVal) -> Result<&'a Vector<MaltVal>> {
    val.as_seq()
        .ok_or_else(|| Error::type_error(name, "list or vector", val.type_name()))
}

/// Elements of a list or vector, with `nil` standing for an empty sequence.
pub(crate) fn seq_or_nil(name: &str, val: &MaltVal) -> Result<Vector<MaltVal>> {
    match val {
        MaltVal::Nil => Ok(Vector::new()),
        other => seq_arg(name, other).cloned(),
    }
}

pub(crate) fn fn_arg<'a>(name: &str, val: &'a MaltVal) -> Result<&'a MaltVal> {
    match val {
        MaltVal::Closure(_) | MaltVal::NativeFn(_) => Ok(val),
        other => Err(Error::type_error(name, "function", other.type_name())),
    }
}
