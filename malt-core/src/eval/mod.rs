// malt-core - Trampolined evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Evaluator for malt forms.
//!
//! `eval` runs a single loop over `(form, env)`. Special forms in tail
//! position and calls to closures replace the pair and go round again
//! instead of recursing, so tail calls never grow the host stack.

pub mod apply;
pub mod exceptions;
pub mod macros;
pub mod quasiquote;
pub mod special_forms;

pub use apply::{NativeFnImpl, apply, make_closure, make_native_fn};
pub use macros::macroexpand;
pub use quasiquote::quasiquote;

use malt_parser::{MaltVal, OrdMap, Vector};
use tracing::trace;

use crate::env::Env;
use crate::error::{Error, Result};

/// Outcome of one step of the trampoline.
pub enum Step {
    /// Evaluation finished with this value.
    Return(MaltVal),
    /// Continue with this form in this environment.
    TailCall(MaltVal, Env),
}

/// Evaluate a form in an environment.
pub fn eval(form: &MaltVal, env: &Env) -> Result<MaltVal> {
    let mut form = form.clone();
    let mut env = env.clone();

    loop {
        trace!(form = %form, "eval");

        if !matches!(form, MaltVal::List(..)) {
            return eval_ast(&form, &env);
        }

        form = macroexpand(form, &env)?;
        let items = match &form {
            MaltVal::List(items, _) => items.clone(),
            _ => return eval_ast(&form, &env),
        };
        let Some(head) = items.front() else {
            return Ok(form);
        };
        let args: Vec<MaltVal> = items.iter().skip(1).cloned().collect();

        let step = match head {
            MaltVal::Symbol(sym) => match sym.name() {
                "def!" => special_forms::eval_def(&args, &env)?,
                "defmacro!" => special_forms::eval_defmacro(&args, &env)?,
                "let*" => special_forms::eval_let(&args, &env)?,
                "do" => special_forms::eval_do(&args, &env)?,
                "if" => special_forms::eval_if(&args, &env)?,
                "fn*" => special_forms::eval_fn(&args, &env)?,
                "quote" => special_forms::eval_quote(&args)?,
                "quasiquote" => special_forms::eval_quasiquote(&args, &env)?,
                "quasiquoteexpand" => special_forms::eval_quasiquoteexpand(&args)?,
                "macroexpand" => special_forms::eval_macroexpand(&args, &env)?,
                "try*" => exceptions::eval_try(&args, &env)?,
                _ => apply_form(head, &args, &env)?,
            },
            _ => apply_form(head, &args, &env)?,
        };

        match step {
            Step::Return(val) => return Ok(val),
            Step::TailCall(next_form, next_env) => {
                form = next_form;
                env = next_env;
            }
        }
    }
}

/// Evaluate a form that is not a non-empty list: resolve symbols, evaluate
/// list and vector elements and map values, everything else evaluates to
/// itself. Map keys are taken as written.
pub fn eval_ast(form: &MaltVal, env: &Env) -> Result<MaltVal> {
    match form {
        MaltVal::Symbol(sym) => env.lookup(sym),
        MaltVal::List(items, _) => Ok(MaltVal::List(eval_items(items, env)?, None)),
        MaltVal::Vector(items, _) => Ok(MaltVal::Vector(eval_items(items, env)?, None)),
        MaltVal::Map(entries, _) => {
            let mut out = OrdMap::new();
            for (k, v) in entries.iter() {
                out.insert(k.clone(), eval(v, env)?);
            }
            Ok(MaltVal::Map(out, None))
        }
        _ => Ok(form.clone()),
    }
}

fn eval_items(items: &Vector<MaltVal>, env: &Env) -> Result<Vector<MaltVal>> {
    items.iter().map(|item| eval(item, env)).collect()
}

/// Function application. Closures continue in the trampoline; natives are
/// called directly.
fn apply_form(head: &MaltVal, args: &[MaltVal], env: &Env) -> Result<Step> {
    let func = eval(head, env)?;
    let args = args
        .iter()
        .map(|arg| eval(arg, env))
        .collect::<Result<Vec<_>>>()?;

    match &func {
        MaltVal::Closure(closure) => {
            let frame = apply::bind_closure(closure, &args)?;
            trace!(params = ?closure.params, "tail call");
            Ok(Step::TailCall((*closure.body).clone(), frame))
        }
        MaltVal::NativeFn(native) => apply::apply_native(native, &args).map(Step::Return),
        other => Err(Error::not_a_function(other)),
    }
}

// ============================================================================
// Tests
// ============================================================================
