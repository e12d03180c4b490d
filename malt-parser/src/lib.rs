// malt-parser - Reader, printer and values for the malt language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # malt-parser
//!
//! Reader and printer for malt, plus the `MaltVal` data model they share.

pub mod lexer;
pub mod parser;
pub mod printer;
pub mod strings;
pub mod symbol;
pub mod value;

pub use im::{OrdMap, Vector};
pub use lexer::{Lexer, Token};
pub use parser::{ParseError, Reader, read_all, read_str};
pub use printer::{pr_seq, pr_str};
pub use symbol::{Keyword, Symbol};
pub use value::{MaltAtom, MaltClosure, MaltNativeFn, MaltVal, Meta};
