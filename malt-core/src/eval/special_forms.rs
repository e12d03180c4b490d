// malt-core - Special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Special forms: def!, defmacro!, let*, do, if, fn*, quote, quasiquote,
//! quasiquoteexpand, macroexpand.
//!
//! Each handler receives the unevaluated arguments and returns a `Step`, so
//! forms with a tail position hand their last expression back to the loop.

use malt_parser::{MaltVal, Symbol};
use tracing::debug;

use super::{Step, eval, macroexpand, make_closure, quasiquote};
use crate::env::Env;
use crate::error::{AritySpec, Error, Result};

fn expect_symbol(form: &'static str, val: &MaltVal) -> Result<Symbol> {
    match val {
        MaltVal::Symbol(sym) => Ok(sym.clone()),
        other => Err(Error::syntax(
            form,
            format!("expected a symbol, got {}", other.type_name()),
        )),
    }
}

/// (def! name expr)
pub fn eval_def(args: &[MaltVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::arity("def!", 2, args.len()));
    }
    let name = expect_symbol("def!", &args[0])?;
    let val = eval(&args[1], env)?;
    env.define(name, val.clone());
    Ok(Step::Return(val))
}

/// (defmacro! name expr) - like def!, but closures are flagged as macros
pub fn eval_defmacro(args: &[MaltVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::arity("defmacro!", 2, args.len()));
    }
    let name = expect_symbol("defmacro!", &args[0])?;
    let val = match eval(&args[1], env)? {
        MaltVal::Closure(closure) => MaltVal::Closure(closure.to_macro()),
        other => other,
    };
    debug!(name = %name, "defined macro");
    env.define(name, val.clone());
    Ok(Step::Return(val))
}

/// (let* [name expr ...] body)
///
/// Each binding is evaluated in the frame being built, so later bindings
/// see earlier ones.
pub fn eval_let(args: &[MaltVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::arity("let*", 2, args.len()));
    }
    let Some(bindings) = args[0].as_seq() else {
        return Err(Error::syntax("let*", "bindings must be a list or vector"));
    };
    if bindings.len() % 2 != 0 {
        return Err(Error::syntax(
            "let*",
            "bindings must have an even number of forms",
        ));
    }

    let frame = env.child();
    let mut iter = bindings.iter();
    while let (Some(name), Some(expr)) = (iter.next(), iter.next()) {
        let name = expect_symbol("let*", name)?;
        let val = eval(expr, &frame)?;
        frame.define(name, val);
    }
    Ok(Step::TailCall(args[1].clone(), frame))
}

/// (do expr...) - all but the last for effect
pub fn eval_do(args: &[MaltVal], env: &Env) -> Result<Step> {
    let Some((last, init)) = args.split_last() else {
        return Ok(Step::Return(MaltVal::Nil));
    };
    for expr in init {
        eval(expr, env)?;
    }
    Ok(Step::TailCall(last.clone(), env.clone()))
}

/// (if cond then else?)
pub fn eval_if(args: &[MaltVal], env: &Env) -> Result<Step> {
    if !(2..=3).contains(&args.len()) {
        return Err(Error::arity_spec("if", AritySpec::Range(2, 3), args.len()));
    }
    let branch = if eval(&args[0], env)?.is_truthy() {
        &args[1]
    } else {
        match args.get(2) {
            Some(else_branch) => else_branch,
            None => return Ok(Step::Return(MaltVal::Nil)),
        }
    };
    Ok(Step::TailCall(branch.clone(), env.clone()))
}

/// (fn* [params] body)
pub fn eval_fn(args: &[MaltVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::arity("fn*", 2, args.len()));
    }
    let Some(params) = args[0].as_seq() else {
        return Err(Error::syntax("fn*", "parameters must be a list or vector"));
    };
    Ok(Step::Return(make_closure(params.clone(), args[1].clone(), env)))
}

/// (quote form)
pub fn eval_quote(args: &[MaltVal]) -> Result<Step> {
    Ok(Step::Return(args.first().cloned().unwrap_or(MaltVal::Nil)))
}

/// (quasiquote form) - expand, then evaluate the expansion in tail position
pub fn eval_quasiquote(args: &[MaltVal], env: &Env) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::arity("quasiquote", 1, args.len()));
    }
    Ok(Step::TailCall(quasiquote(&args[0])?, env.clone()))
}

/// (quasiquoteexpand form) - the expansion as data
pub fn eval_quasiquoteexpand(args: &[MaltVal]) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::arity("quasiquoteexpand", 1, args.len()));
    }
    quasiquote(&args[0]).map(Step::Return)
}

/// (macroexpand form) - expand to a fixpoint without evaluating
pub fn eval_macroexpand(args: &[MaltVal], env: &Env) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::arity("macroexpand", 1, args.len()));
    }
    macroexpand(args[0].clone(), env).map(Step::Return)
}
