// malt-core - Exception handling
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `try*`/`catch*` special form.
//!
//! Every failure is catchable. The handler sees a map describing it:
//! `{:type "UserException" :value v}` for a thrown value, or
//! `{:type <kind> :message <text>}` for anything raised by the interpreter.

use malt_parser::{MaltVal, Symbol};
use tracing::debug;

use super::{Step, eval};
use crate::env::Env;
use crate::error::{Error, Result};

/// Convert a failure into the map bound by `catch*`.
pub fn error_to_value(err: Error) -> MaltVal {
    let kind = MaltVal::string(err.kind_name());
    match err {
        Error::Thrown(value) => MaltVal::map(vec![
            (MaltVal::keyword("type"), kind),
            (MaltVal::keyword("value"), value),
        ]),
        other => MaltVal::map(vec![
            (MaltVal::keyword("type"), kind),
            (MaltVal::keyword("message"), MaltVal::string(other.to_string())),
        ]),
    }
}

/// Parse `(catch* binding handler)`.
fn parse_catch(clause: &MaltVal) -> Result<(Symbol, MaltVal)> {
    let items = match clause {
        MaltVal::List(items, _) if items.front().is_some_and(|h| h.is_symbol_named("catch*")) => {
            items
        }
        _ => return Err(Error::syntax("try*", "expected a (catch* binding expr) clause")),
    };
    if items.len() != 3 {
        return Err(Error::syntax(
            "try*",
            "catch* requires a binding and an expression",
        ));
    }
    match &items[1] {
        MaltVal::Symbol(sym) => Ok((sym.clone(), items[2].clone())),
        other => Err(Error::syntax(
            "try*",
            format!("catch* binding must be a symbol, got {}", other.type_name()),
        )),
    }
}

/// (try* expr (catch* binding handler)?)
pub fn eval_try(args: &[MaltVal], env: &Env) -> Result<Step> {
    let Some(body) = args.first() else {
        return Err(Error::syntax("try*", "requires an expression"));
    };
    if args.len() > 2 {
        return Err(Error::syntax(
            "try*",
            "expected an expression and at most one catch* clause",
        ));
    }
    let Some(clause) = args.get(1) else {
        return eval(body, env).map(Step::Return);
    };
    let (binding, handler) = parse_catch(clause)?;

    match eval(body, env) {
        Ok(val) => Ok(Step::Return(val)),
        Err(err) => {
            debug!(kind = err.kind_name(), error = %err, "caught");
            let frame = env.child();
            frame.define(binding, error_to_value(err));
            Ok(Step::TailCall(handler, frame))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
