// malt-parser - Core value types
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime values for malt.
//!
//! `MaltVal` is the closed set of everything a program can read, compute or
//! bind. Collections are persistent (`im`), so "modifying" one returns a new
//! value that shares structure with the old. The atom is the only mutable
//! cell; every other value has value semantics.

use std::any::Any;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use im::{OrdMap, Vector};

use crate::printer::pr_str;
use crate::symbol::{Keyword, Symbol};

/// Optional metadata attached to a collection or function.
///
/// Metadata never participates in equality or ordering.
pub type Meta = Option<Rc<MaltVal>>;

/// A malt value.
#[derive(Clone)]
pub enum MaltVal {
    Nil,
    Bool(bool),
    Int(i64),
    String(Rc<str>),
    Symbol(Symbol),
    Keyword(Keyword),
    List(Vector<MaltVal>, Meta),
    Vector(Vector<MaltVal>, Meta),
    Map(OrdMap<MaltVal, MaltVal>, Meta),
    /// Shared mutable cell
    Atom(MaltAtom),
    /// Function supplied by the host
    NativeFn(MaltNativeFn),
    /// Function (or macro) created by `fn*`
    Closure(MaltClosure),
    /// End of reader input, never a program value
    Eof,
    /// An erroneous value carried as data
    Error(Rc<str>),
}

// ============================================================================
// Function Types
// ============================================================================

/// A closure created by `fn*`.
///
/// The defining environment lives in `malt-core`, so it is held type-erased
/// here and downcast by the evaluator.
#[derive(Clone)]
pub struct MaltClosure {
    /// Parameter spec as written, e.g. `(a b & rest)`
    pub params: Vector<MaltVal>,
    pub body: Rc<MaltVal>,
    env: Rc<dyn Any>,
    pub is_macro: bool,
    pub meta: Meta,
}

impl MaltClosure {
    pub fn new(params: Vector<MaltVal>, body: MaltVal, env: Rc<dyn Any>) -> Self {
        MaltClosure {
            params,
            body: Rc::new(body),
            env,
            is_macro: false,
            meta: None,
        }
    }

    /// The captured defining environment.
    pub fn env(&self) -> &Rc<dyn Any> {
        &self.env
    }

    /// A copy of this closure flagged as a macro.
    #[must_use]
    pub fn to_macro(&self) -> Self {
        MaltClosure {
            is_macro: true,
            ..self.clone()
        }
    }

    fn identity(&self) -> (usize, usize) {
        (
            Rc::as_ptr(&self.body) as usize,
            Rc::as_ptr(&self.env) as *const () as usize,
        )
    }
}

impl fmt::Debug for MaltClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_macro { "macro" } else { "fn" };
        write!(f, "#<{} {}>", kind, MaltVal::List(self.params.clone(), None))
    }
}

impl PartialEq for MaltClosure {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
            && Rc::ptr_eq(&self.env, &other.env)
            && self.is_macro == other.is_macro
    }
}

/// A function implemented in Rust.
#[derive(Clone)]
pub struct MaltNativeFn {
    pub name: &'static str,
    /// The actual function (type-erased)
    func: Rc<dyn Any>,
    pub meta: Meta,
}

impl MaltNativeFn {
    pub fn new(name: &'static str, func: Rc<dyn Any>) -> Self {
        MaltNativeFn {
            name,
            func,
            meta: None,
        }
    }

    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }
}

impl fmt::Debug for MaltNativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<native {}>", self.name)
    }
}

impl PartialEq for MaltNativeFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

// ============================================================================
// Atom Type
// ============================================================================

/// The single mutable reference cell.
///
/// Clones share the cell, so a `reset!` through any alias is visible
/// through all of them.
///
/// Atoms compare and order by their current contents. Mutating an atom
/// that is already a key in a map leaves that map's ordering stale, and
/// lookups in it are unspecified afterwards.
#[derive(Clone)]
pub struct MaltAtom {
    value: Rc<RefCell<MaltVal>>,
}

impl MaltAtom {
    pub fn new(value: MaltVal) -> Self {
        MaltAtom {
            value: Rc::new(RefCell::new(value)),
        }
    }

    /// Current contents.
    pub fn deref(&self) -> MaltVal {
        self.value.borrow().clone()
    }

    /// Replace the contents, returning the new value.
    pub fn reset(&self, new_val: MaltVal) -> MaltVal {
        *self.value.borrow_mut() = new_val.clone();
        new_val
    }

    /// True when both handles refer to the same cell.
    pub fn ptr_eq(&self, other: &MaltAtom) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for MaltAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(atom {:?})", self.value.borrow())
    }
}

// Atoms compare by their current contents.
impl PartialEq for MaltAtom {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.value.borrow() == *other.value.borrow()
    }
}

// ============================================================================
// Constructors and accessors
// ============================================================================

impl MaltVal {
    pub fn nil() -> Self {
        MaltVal::Nil
    }

    pub fn bool(b: bool) -> Self {
        MaltVal::Bool(b)
    }

    pub fn int(n: i64) -> Self {
        MaltVal::Int(n)
    }

    pub fn string(s: impl Into<Rc<str>>) -> Self {
        MaltVal::String(s.into())
    }

    pub fn symbol(name: &str) -> Self {
        MaltVal::Symbol(Symbol::new(name))
    }

    pub fn keyword(name: &str) -> Self {
        MaltVal::Keyword(Keyword::new(name))
    }

    pub fn error(message: impl Into<Rc<str>>) -> Self {
        MaltVal::Error(message.into())
    }

    pub fn empty_list() -> Self {
        MaltVal::List(Vector::new(), None)
    }

    pub fn list(items: Vec<MaltVal>) -> Self {
        MaltVal::List(Vector::from(items), None)
    }

    pub fn list_from(items: Vector<MaltVal>) -> Self {
        MaltVal::List(items, None)
    }

    pub fn vector(items: Vec<MaltVal>) -> Self {
        MaltVal::Vector(Vector::from(items), None)
    }

    pub fn vector_from(items: Vector<MaltVal>) -> Self {
        MaltVal::Vector(items, None)
    }

    /// Build a map; later duplicates of a key win.
    pub fn map(pairs: Vec<(MaltVal, MaltVal)>) -> Self {
        MaltVal::Map(pairs.into_iter().collect(), None)
    }

    pub fn atom(value: MaltVal) -> Self {
        MaltVal::Atom(MaltAtom::new(value))
    }

    /// Only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, MaltVal::Nil | MaltVal::Bool(false))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, MaltVal::Nil)
    }

    /// Elements of a list or vector.
    pub fn as_seq(&self) -> Option<&Vector<MaltVal>> {
        match self {
            MaltVal::List(items, _) | MaltVal::Vector(items, _) => Some(items),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            MaltVal::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// True for a symbol with the given name.
    pub fn is_symbol_named(&self, name: &str) -> bool {
        matches!(self, MaltVal::Symbol(sym) if sym.name() == name)
    }

    pub fn is_macro(&self) -> bool {
        matches!(self, MaltVal::Closure(c) if c.is_macro)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            MaltVal::Nil => "nil",
            MaltVal::Bool(_) => "boolean",
            MaltVal::Int(_) => "integer",
            MaltVal::String(_) => "string",
            MaltVal::Symbol(_) => "symbol",
            MaltVal::Keyword(_) => "keyword",
            MaltVal::List(_, _) => "list",
            MaltVal::Vector(_, _) => "vector",
            MaltVal::Map(_, _) => "map",
            MaltVal::Atom(_) => "atom",
            MaltVal::NativeFn(_) => "native function",
            MaltVal::Closure(c) if c.is_macro => "macro",
            MaltVal::Closure(_) => "function",
            MaltVal::Eof => "eof",
            MaltVal::Error(_) => "error",
        }
    }

    /// Attached metadata, `nil` when absent or unsupported.
    pub fn meta(&self) -> MaltVal {
        let meta = match self {
            MaltVal::List(_, meta) | MaltVal::Vector(_, meta) | MaltVal::Map(_, meta) => meta,
            MaltVal::Closure(c) => &c.meta,
            MaltVal::NativeFn(f) => &f.meta,
            _ => return MaltVal::Nil,
        };
        meta.as_deref().cloned().unwrap_or(MaltVal::Nil)
    }

    /// Shallow copy carrying new metadata.
    /// Returns None if the value type doesn't support metadata.
    pub fn with_meta(&self, meta: MaltVal) -> Option<MaltVal> {
        let meta = Some(Rc::new(meta));
        match self {
            MaltVal::List(items, _) => Some(MaltVal::List(items.clone(), meta)),
            MaltVal::Vector(items, _) => Some(MaltVal::Vector(items.clone(), meta)),
            MaltVal::Map(m, _) => Some(MaltVal::Map(m.clone(), meta)),
            MaltVal::Closure(c) => Some(MaltVal::Closure(MaltClosure {
                meta,
                ..c.clone()
            })),
            MaltVal::NativeFn(f) => Some(MaltVal::NativeFn(MaltNativeFn {
                meta,
                ..f.clone()
            })),
            _ => None,
        }
    }
}

impl From<Symbol> for MaltVal {
    fn from(sym: Symbol) -> Self {
        MaltVal::Symbol(sym)
    }
}

impl From<Keyword> for MaltVal {
    fn from(kw: Keyword) -> Self {
        MaltVal::Keyword(kw)
    }
}

impl From<i64> for MaltVal {
    fn from(n: i64) -> Self {
        MaltVal::Int(n)
    }
}

impl From<bool> for MaltVal {
    fn from(b: bool) -> Self {
        MaltVal::Bool(b)
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for MaltVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pr_str(self, true))
    }
}

impl fmt::Debug for MaltVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaltVal::Atom(a) => write!(f, "{:?}", a),
            MaltVal::Closure(c) => write!(f, "{:?}", c),
            MaltVal::NativeFn(n) => write!(f, "{:?}", n),
            other => f.write_str(&pr_str(other, true)),
        }
    }
}

// ============================================================================
// Equality and ordering
// ============================================================================

impl PartialEq for MaltVal {
    fn eq(&self, other: &Self) -> bool {
        // Lists and vectors are cross-equal; metadata is ignored.
        match (self, other) {
            (MaltVal::Nil, MaltVal::Nil) => true,
            (MaltVal::Eof, MaltVal::Eof) => true,
            (MaltVal::Bool(a), MaltVal::Bool(b)) => a == b,
            (MaltVal::Int(a), MaltVal::Int(b)) => a == b,
            (MaltVal::String(a), MaltVal::String(b)) => a == b,
            (MaltVal::Symbol(a), MaltVal::Symbol(b)) => a == b,
            (MaltVal::Keyword(a), MaltVal::Keyword(b)) => a == b,
            (
                MaltVal::List(a, _) | MaltVal::Vector(a, _),
                MaltVal::List(b, _) | MaltVal::Vector(b, _),
            ) => a == b,
            (MaltVal::Map(a, _), MaltVal::Map(b, _)) => a == b,
            (MaltVal::Atom(a), MaltVal::Atom(b)) => a == b,
            (MaltVal::NativeFn(a), MaltVal::NativeFn(b)) => a == b,
            (MaltVal::Closure(a), MaltVal::Closure(b)) => a == b,
            (MaltVal::Error(a), MaltVal::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MaltVal {}

impl PartialOrd for MaltVal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MaltVal {
    fn cmp(&self, other: &Self) -> Ordering {
        // Must agree with PartialEq, so lists and vectors share a rank.
        fn rank(v: &MaltVal) -> u8 {
            match v {
                MaltVal::Nil => 0,
                MaltVal::Bool(_) => 1,
                MaltVal::Int(_) => 2,
                MaltVal::String(_) => 3,
                MaltVal::Keyword(_) => 4,
                MaltVal::Symbol(_) => 5,
                MaltVal::List(_, _) | MaltVal::Vector(_, _) => 6,
                MaltVal::Map(_, _) => 7,
                MaltVal::Atom(_) => 8,
                MaltVal::NativeFn(_) => 9,
                MaltVal::Closure(_) => 10,
                MaltVal::Error(_) => 11,
                MaltVal::Eof => 12,
            }
        }

        match (self, other) {
            (MaltVal::Bool(a), MaltVal::Bool(b)) => a.cmp(b),
            (MaltVal::Int(a), MaltVal::Int(b)) => a.cmp(b),
            (MaltVal::String(a), MaltVal::String(b)) => a.cmp(b),
            (MaltVal::Keyword(a), MaltVal::Keyword(b)) => a.cmp(b),
            (MaltVal::Symbol(a), MaltVal::Symbol(b)) => a.cmp(b),
            (
                MaltVal::List(a, _) | MaltVal::Vector(a, _),
                MaltVal::List(b, _) | MaltVal::Vector(b, _),
            ) => a.iter().cmp(b.iter()),
            (MaltVal::Map(a, _), MaltVal::Map(b, _)) => a.iter().cmp(b.iter()),
            (MaltVal::Atom(a), MaltVal::Atom(b)) => {
                if a.ptr_eq(b) {
                    Ordering::Equal
                } else {
                    a.deref().cmp(&b.deref())
                }
            }
            (MaltVal::NativeFn(a), MaltVal::NativeFn(b)) => a.name.cmp(b.name),
            (MaltVal::Closure(a), MaltVal::Closure(b)) => a
                .identity()
                .cmp(&b.identity())
                .then(a.is_macro.cmp(&b.is_macro)),
            (MaltVal::Error(a), MaltVal::Error(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
