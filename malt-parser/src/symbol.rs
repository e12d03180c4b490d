// malt-parser - Interned symbol and keyword names
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols and keywords are interned names.
//!
//! # Interning
//!
//! Both kinds of name are backed by a per-thread string interner, so two
//! symbols spelled the same way share one allocation. Equality and hashing
//! are pointer operations; ordering falls back to the text.
//!
//! The interpreter is single-threaded, so the interner lives in a
//! `thread_local!` cell rather than behind a lock. Interned names are never
//! freed for the lifetime of the thread.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

thread_local! {
    static INTERNER: RefCell<HashSet<Rc<str>>> = RefCell::new(HashSet::new());
}

fn intern(name: &str) -> Rc<str> {
    INTERNER.with(|cell| {
        let mut strings = cell.borrow_mut();
        if let Some(existing) = strings.get(name) {
            return Rc::clone(existing);
        }
        let interned: Rc<str> = Rc::from(name);
        strings.insert(Rc::clone(&interned));
        interned
    })
}

macro_rules! interned_name {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $ty {
            name: Rc<str>,
        }

        impl $ty {
            pub fn new(name: &str) -> Self {
                $ty { name: intern(name) }
            }

            #[must_use]
            pub fn name(&self) -> &str {
                &self.name
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                Rc::ptr_eq(&self.name, &other.name)
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                if Rc::ptr_eq(&self.name, &other.name) {
                    Ordering::Equal
                } else {
                    self.name.cmp(&other.name)
                }
            }
        }

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                Rc::as_ptr(&self.name).cast::<u8>().hash(state);
            }
        }

        impl From<&str> for $ty {
            fn from(name: &str) -> Self {
                $ty::new(name)
            }
        }
    };
}

interned_name! {
    /// An identifier resolved through the environment when evaluated.
    Symbol
}

interned_name! {
    /// A self-evaluating name, printed with a leading colon.
    Keyword
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword(:{})", self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================
