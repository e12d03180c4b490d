// malt-core - Function application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Function application helpers.

use std::any::Any;
use std::rc::Rc;

use malt_parser::{MaltClosure, MaltNativeFn, MaltVal, Vector};

use crate::env::Env;
use crate::error::{Error, Result};

use super::eval;

/// Type of native function implementations.
pub type NativeFnImpl = dyn Fn(&[MaltVal]) -> Result<MaltVal>;

/// Apply a function value to already-evaluated arguments.
///
/// Used by primitives such as `apply`, `map` and `swap!` that call back into
/// the interpreter.
pub fn apply(func: &MaltVal, args: &[MaltVal]) -> Result<MaltVal> {
    match func {
        MaltVal::Closure(closure) => apply_closure(closure, args),
        MaltVal::NativeFn(native) => apply_native(native, args),
        other => Err(Error::not_a_function(other)),
    }
}

/// Evaluate a closure's body in a fresh frame.
pub fn apply_closure(closure: &MaltClosure, args: &[MaltVal]) -> Result<MaltVal> {
    let frame = bind_closure(closure, args)?;
    eval(&closure.body, &frame)
}

/// Build the frame a closure body runs in.
pub fn bind_closure(closure: &MaltClosure, args: &[MaltVal]) -> Result<Env> {
    let params: Vec<MaltVal> = closure.params.iter().cloned().collect();
    Env::bind(closure_env(closure)?, &params, args)
}

fn closure_env(closure: &MaltClosure) -> Result<&Env> {
    closure
        .env()
        .downcast_ref::<Env>()
        .ok_or_else(|| Error::Evaluation("closure environment has an unexpected type".into()))
}

/// Apply a native function.
pub fn apply_native(func: &MaltNativeFn, args: &[MaltVal]) -> Result<MaltVal> {
    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Evaluation(format!("native '{}' has an unexpected type", func.name)))?;
    f(args)
}

/// Create a native function value.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&[MaltVal]) -> Result<MaltVal> + 'static,
) -> MaltNativeFn {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    MaltNativeFn::new(name, func_any)
}

/// Create a closure capturing `env`.
pub fn make_closure(params: Vector<MaltVal>, body: MaltVal, env: &Env) -> MaltVal {
    let env_any: Rc<dyn Any> = Rc::new(env.clone());
    MaltVal::Closure(MaltClosure::new(params, body, env_any))
}
