// malt-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use malt_parser::{MaltVal, Symbol};

use crate::error::{Error, Result};
use crate::eval::make_native_fn;

/// A lexical environment for variable bindings.
///
/// Environments form a chain through shared outer references. Several child
/// frames may share one outer frame, e.g. sibling closures created in the
/// same `let*`, and a frame lives as long as anything still refers to it.
///
/// # Examples
///
/// ```
/// use malt_core::Env;
/// use malt_parser::{MaltVal, Symbol};
///
/// let env = Env::new();
/// env.define(Symbol::new("x"), MaltVal::int(42));
///
/// let child = env.child();
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), MaltVal::int(42));
///
/// child.define(Symbol::new("x"), MaltVal::int(100));
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), MaltVal::int(100));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), MaltVal::int(42));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, MaltVal>,
    outer: Option<Env>,
}

/// A non-owning handle to an environment.
///
/// Natives that need the root environment hold one of these so the root
/// does not keep itself alive through its own bindings.
#[derive(Debug, Clone)]
pub struct WeakEnv {
    inner: Weak<RefCell<EnvInner>>,
}

impl WeakEnv {
    pub fn upgrade(&self) -> Option<Env> {
        self.inner.upgrade().map(|inner| Env { inner })
    }
}

impl Default for Env {
    fn default() -> Self {
        Env::new()
    }
}

impl Env {
    /// Create a new root environment with no outer frame.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                outer: None,
            })),
        }
    }

    /// Create a child environment with this environment as outer frame.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                outer: Some(self.clone()),
            })),
        }
    }

    /// Bind parameters to arguments in a new frame whose outer is `outer`.
    ///
    /// A `&` in second-to-last position collects the remaining arguments,
    /// possibly none, into a list bound to the last parameter.
    pub fn bind(outer: &Env, params: &[MaltVal], args: &[MaltVal]) -> Result<Env> {
        let mut names = Vec::with_capacity(params.len());
        for param in params {
            match param {
                MaltVal::Symbol(sym) => names.push(sym.clone()),
                _ => {
                    return Err(Error::InvalidArgument(
                        "Bindings should be symbols".to_string(),
                    ));
                }
            }
        }

        let env = outer.child();
        match names.iter().position(|s| s.name() == "&") {
            Some(amp) => {
                if amp + 2 != names.len() {
                    return Err(Error::InvalidArgument("Bad variadic argument".to_string()));
                }
                if args.len() < amp {
                    return Err(mismatch(amp, args.len()));
                }
                for (name, arg) in names[..amp].iter().zip(args) {
                    env.define(name.clone(), arg.clone());
                }
                env.define(names[amp + 1].clone(), MaltVal::list(args[amp..].to_vec()));
            }
            None => {
                if names.len() != args.len() {
                    return Err(mismatch(names.len(), args.len()));
                }
                for (name, arg) in names.into_iter().zip(args) {
                    env.define(name, arg.clone());
                }
            }
        }
        Ok(env)
    }

    /// Define a binding in this frame only.
    pub fn define(&self, sym: Symbol, val: MaltVal) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    /// Look up a symbol, searching outward through enclosing frames.
    pub fn lookup(&self, sym: &Symbol) -> Result<MaltVal> {
        self.get(sym).ok_or_else(|| Error::NotFound(sym.clone()))
    }

    /// Like `lookup`, without the error.
    /// Iterative so deep frame chains cannot exhaust the stack.
    pub fn get(&self, sym: &Symbol) -> Option<MaltVal> {
        let mut current = self.clone();
        loop {
            let outer = {
                let inner = current.inner.borrow();
                if let Some(val) = inner.bindings.get(sym) {
                    return Some(val.clone());
                }
                inner.outer.clone()
            };
            current = outer?;
        }
    }

    pub fn downgrade(&self) -> WeakEnv {
        WeakEnv {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Register a native function under `name`.
    pub fn define_native(
        &self,
        name: &'static str,
        func: impl Fn(&[MaltVal]) -> Result<MaltVal> + 'static,
    ) {
        self.define(
            Symbol::new(name),
            MaltVal::NativeFn(make_native_fn(name, func)),
        );
    }
}

fn mismatch(expected: usize, got: usize) -> Error {
    Error::InvalidArgument(format!(
        "Bindings and expressions mismatch, expected {} got {}",
        expected, got
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s)
    }

    fn syms(names: &[&str]) -> Vec<MaltVal> {
        names.iter().map(|n| MaltVal::symbol(n)).collect()
    }

    fn ints(ns: &[i64]) -> Vec<MaltVal> {
        ns.iter().map(|&n| MaltVal::int(n)).collect()
    }

    #[test]
    fn test_define_and_lookup() {
        let env = Env::new();
        env.define(sym("x"), MaltVal::int(42));
        assert_eq!(env.lookup(&sym("x")).unwrap(), MaltVal::int(42));
    }

    #[test]
    fn test_undefined_symbol() {
        let env = Env::new();
        let err = env.lookup(&sym("nope")).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref s) if s.name() == "nope"));
        assert_eq!(err.to_string(), "Symbol 'nope' not found");
    }

    #[test]
    fn test_child_shadows_without_touching_outer() {
        let outer = Env::new();
        outer.define(sym("x"), MaltVal::int(1));
        let child = outer.child();
        child.define(sym("x"), MaltVal::int(2));
        assert_eq!(child.lookup(&sym("x")).unwrap(), MaltVal::int(2));
        assert_eq!(outer.lookup(&sym("x")).unwrap(), MaltVal::int(1));
    }

    #[test]
    fn test_siblings_share_outer() {
        let outer = Env::new();
        let a = outer.child();
        let b = outer.child();
        outer.define(sym("shared"), MaltVal::int(7));
        assert_eq!(a.lookup(&sym("shared")).unwrap(), MaltVal::int(7));
        assert_eq!(b.lookup(&sym("shared")).unwrap(), MaltVal::int(7));
    }

    #[test]
    fn test_bind_positional() {
        let env = Env::bind(&Env::new(), &syms(&["a", "b"]), &ints(&[1, 2])).unwrap();
        assert_eq!(env.lookup(&sym("a")).unwrap(), MaltVal::int(1));
        assert_eq!(env.lookup(&sym("b")).unwrap(), MaltVal::int(2));
    }

    #[test]
    fn test_bind_variadic() {
        let params = syms(&["a", "b", "&", "rest"]);
        let env = Env::bind(&Env::new(), &params, &ints(&[1, 2, 3, 4, 5])).unwrap();
        assert_eq!(env.lookup(&sym("a")).unwrap(), MaltVal::int(1));
        assert_eq!(env.lookup(&sym("b")).unwrap(), MaltVal::int(2));
        assert_eq!(
            env.lookup(&sym("rest")).unwrap(),
            MaltVal::list(ints(&[3, 4, 5]))
        );
    }

    #[test]
    fn test_bind_variadic_empty_rest() {
        let params = syms(&["a", "b", "&", "rest"]);
        let env = Env::bind(&Env::new(), &params, &ints(&[1, 2])).unwrap();
        assert_eq!(env.lookup(&sym("rest")).unwrap(), MaltVal::empty_list());
    }

    #[test]
    fn test_bind_misplaced_ampersand() {
        let err = Env::bind(&Env::new(), &syms(&["&", "a", "b"]), &ints(&[1])).unwrap_err();
        assert_eq!(err.to_string(), "Bad variadic argument");
    }

    #[test]
    fn test_bind_count_mismatch() {
        let err = Env::bind(&Env::new(), &syms(&["a", "b"]), &ints(&[1])).unwrap_err();
        assert!(err.to_string().starts_with("Bindings and expressions mismatch"));
        assert_eq!(err.kind_name(), "InvalidArgumentError");
    }

    #[test]
    fn test_bind_requires_symbols() {
        let err = Env::bind(&Env::new(), &ints(&[1]), &ints(&[1])).unwrap_err();
        assert_eq!(err.to_string(), "Bindings should be symbols");
    }

    #[test]
    fn test_weak_handle() {
        let env = Env::new();
        let weak = env.downgrade();
        assert!(weak.upgrade().is_some());
        drop(env);
        assert!(weak.upgrade().is_none());
    }
}
