// malt-core - Macro expansion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Macro expansion to a fixpoint.

use malt_parser::{MaltClosure, MaltVal};
use tracing::debug;

use super::apply::apply_closure;
use crate::env::Env;
use crate::error::Result;

/// The macro a form calls, if any.
///
/// A form is a macro call when it is a non-empty list whose head is a symbol
/// bound in `env` to a macro-flagged closure. Unbound heads are not errors.
pub fn macro_for(form: &MaltVal, env: &Env) -> Option<MaltClosure> {
    let MaltVal::List(items, _) = form else {
        return None;
    };
    let sym = items.front()?.as_symbol()?;
    match env.get(sym)? {
        MaltVal::Closure(closure) if closure.is_macro => Some(closure),
        _ => None,
    }
}

/// Expand macro calls at the head of `form` until it no longer is one.
pub fn macroexpand(mut form: MaltVal, env: &Env) -> Result<MaltVal> {
    while let Some(mac) = macro_for(&form, env) {
        let args: Vec<MaltVal> = match &form {
            MaltVal::List(items, _) => items.iter().skip(1).cloned().collect(),
            _ => Vec::new(),
        };
        form = apply_closure(&mac, &args)?;
        debug!(expansion = %form, "macroexpand");
    }
    Ok(form)
}
