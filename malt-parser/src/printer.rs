// malt-parser - Printer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Projects values back to text.
//!
//! Readable output re-reads to an equal value for everything the reader can
//! produce; non-readable output emits string contents raw, as `str` and
//! `println` want.

use std::fmt::Write;

use crate::strings::escape;
use crate::value::MaltVal;

/// Print a value, escaping strings when `print_readably` is set.
pub fn pr_str(val: &MaltVal, print_readably: bool) -> String {
    let mut out = String::new();
    write_val(&mut out, val, print_readably);
    out
}

/// Print each value and join them with `sep`.
pub fn pr_seq<'a>(
    vals: impl IntoIterator<Item = &'a MaltVal>,
    print_readably: bool,
    sep: &str,
) -> String {
    let mut out = String::new();
    for (i, val) in vals.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        write_val(&mut out, val, print_readably);
    }
    out
}

fn write_seq<'a>(
    out: &mut String,
    items: impl Iterator<Item = &'a MaltVal>,
    open: char,
    close: char,
    readably: bool,
) {
    out.push(open);
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_val(out, item, readably);
    }
    out.push(close);
}

fn write_val(out: &mut String, val: &MaltVal, readably: bool) {
    // Writing to a String cannot fail.
    let _ = match val {
        MaltVal::Nil => write!(out, "nil"),
        MaltVal::Bool(b) => write!(out, "{}", b),
        MaltVal::Int(n) => write!(out, "{}", n),
        MaltVal::String(s) if readably => write!(out, "\"{}\"", escape(s)),
        MaltVal::String(s) => write!(out, "{}", s),
        MaltVal::Symbol(sym) => write!(out, "{}", sym),
        MaltVal::Keyword(kw) => write!(out, "{}", kw),
        MaltVal::List(items, _) => {
            write_seq(out, items.iter(), '(', ')', readably);
            Ok(())
        }
        MaltVal::Vector(items, _) => {
            write_seq(out, items.iter(), '[', ']', readably);
            Ok(())
        }
        MaltVal::Map(entries, _) => {
            out.push('{');
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_val(out, k, readably);
                out.push(' ');
                write_val(out, v, readably);
            }
            out.push('}');
            Ok(())
        }
        MaltVal::Atom(atom) => {
            out.push_str("(atom ");
            write_val(out, &atom.deref(), readably);
            out.push(')');
            Ok(())
        }
        MaltVal::NativeFn(f) => write!(out, "#<native {}>", f.name),
        MaltVal::Closure(c) if c.is_macro => write!(out, "#<macro>"),
        MaltVal::Closure(_) => write!(out, "#<function>"),
        MaltVal::Eof => write!(out, "<EOF>"),
        MaltVal::Error(msg) => write!(out, "*** {}", msg),
    };
}

// ============================================================================
// Tests
// ============================================================================
