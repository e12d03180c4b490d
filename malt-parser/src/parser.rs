// malt-parser - Reader for malt
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent reader.
//!
//! Converts tokens into `MaltVal` forms. Reader macros (`'`, `` ` ``, `~`,
//! `~@`, `@`, `^`) desugar into ordinary two- or three-element lists.

use im::{OrdMap, Vector};

use crate::lexer::{Lexer, Token};
use crate::strings::read_string_literal;
use crate::symbol::{Keyword, Symbol};
use crate::value::MaltVal;

/// Reader failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unexpected EOF")]
    UnexpectedEof,
    #[error("Missing value for key={key}")]
    MissingMapValue { key: String },
    #[error("Unexpected '{token}'")]
    UnexpectedToken { token: String },
    #[error("String is unbalanced, first and last character must be a '\"'.{}", at(.position))]
    UnbalancedString { position: Option<usize> },
    #[error("Unexpected end of string. (at position {position})")]
    UnexpectedEndOfString { position: usize },
    #[error("Invalid char. ('{ch}' at position {position})")]
    InvalidChar { ch: char, position: usize },
}

fn at(position: &Option<usize>) -> String {
    position
        .map(|p| format!(" (at position {p})"))
        .unwrap_or_default()
}

/// Token cursor with peek/next.
pub struct Reader {
    tokens: Vec<Token>,
    pos: usize,
}

impl Reader {
    pub fn new(source: &str) -> Self {
        Reader {
            tokens: Lexer::tokenize(source),
            pos: 0,
        }
    }

    /// Look at the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the next token.
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Read one form. Returns `MaltVal::Eof` once input is exhausted.
    pub fn read_form(&mut self) -> Result<MaltVal, ParseError> {
        loop {
            let Some(token) = self.peek() else {
                return Ok(MaltVal::Eof);
            };
            if token.is_comment() {
                self.next();
                continue;
            }
            let text = token.text.clone();
            return match text.as_str() {
                "(" => {
                    self.next();
                    let items = self.read_seq(")")?;
                    Ok(MaltVal::List(items, None))
                }
                "[" => {
                    self.next();
                    let items = self.read_seq("]")?;
                    Ok(MaltVal::Vector(items, None))
                }
                "{" => {
                    self.next();
                    self.read_map()
                }
                ")" | "]" | "}" => Err(ParseError::UnexpectedToken { token: text }),
                "'" => self.read_wrapped("quote"),
                "`" => self.read_wrapped("quasiquote"),
                "~" => self.read_wrapped("unquote"),
                "~@" => self.read_wrapped("splice-unquote"),
                "@" => self.read_wrapped("deref"),
                "^" => self.read_meta(),
                _ => {
                    self.next();
                    read_atom(&text)
                }
            };
        }
    }

    /// Read every remaining form.
    pub fn read_all(&mut self) -> Result<Vec<MaltVal>, ParseError> {
        let mut forms = Vec::new();
        loop {
            match self.read_form()? {
                MaltVal::Eof => return Ok(forms),
                form => forms.push(form),
            }
        }
    }

    // ========================================================================
    // Internal parsing methods
    // ========================================================================

    /// Like `read_form`, but end of input is an error.
    fn read_required(&mut self) -> Result<MaltVal, ParseError> {
        match self.read_form()? {
            MaltVal::Eof => Err(ParseError::UnexpectedEof),
            form => Ok(form),
        }
    }

    fn read_seq(&mut self, close: &str) -> Result<Vector<MaltVal>, ParseError> {
        let mut items = Vector::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEof),
                Some(token) if token.text == close => {
                    self.next();
                    return Ok(items);
                }
                Some(token) if token.is_comment() => {
                    self.next();
                }
                Some(_) => items.push_back(self.read_required()?),
            }
        }
    }

    fn read_map(&mut self) -> Result<MaltVal, ParseError> {
        let forms = self.read_seq("}")?;
        if forms.len() % 2 != 0 {
            let key = forms.back().map(|k| k.to_string()).unwrap_or_default();
            return Err(ParseError::MissingMapValue { key });
        }
        let mut map = OrdMap::new();
        let mut iter = forms.into_iter();
        while let (Some(k), Some(v)) = (iter.next(), iter.next()) {
            map.insert(k, v);
        }
        Ok(MaltVal::Map(map, None))
    }

    fn read_wrapped(&mut self, name: &str) -> Result<MaltVal, ParseError> {
        self.next();
        let form = self.read_required()?;
        Ok(MaltVal::list(vec![MaltVal::symbol(name), form]))
    }

    /// `^meta form` reads the metadata first but yields `(with-meta form meta)`.
    fn read_meta(&mut self) -> Result<MaltVal, ParseError> {
        self.next();
        let meta = self.read_required()?;
        let form = self.read_required()?;
        Ok(MaltVal::list(vec![MaltVal::symbol("with-meta"), form, meta]))
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Classify an atom token.
fn read_atom(text: &str) -> Result<MaltVal, ParseError> {
    if text == "nil" {
        return Ok(MaltVal::Nil);
    }
    // Out-of-range literals fall through to a symbol.
    if is_integer(text)
        && let Ok(n) = text.parse::<i64>()
    {
        return Ok(MaltVal::Int(n));
    }
    if text.starts_with('"') {
        return read_string_literal(text).map(MaltVal::string);
    }
    if let Some(name) = text.strip_prefix(':')
        && !name.is_empty()
    {
        return Ok(MaltVal::Keyword(Keyword::new(name)));
    }
    match text {
        "true" => Ok(MaltVal::Bool(true)),
        "false" => Ok(MaltVal::Bool(false)),
        _ => Ok(MaltVal::Symbol(Symbol::new(text))),
    }
}

/// Read the first form of `source`; `MaltVal::Eof` if there is none.
pub fn read_str(source: &str) -> Result<MaltVal, ParseError> {
    Reader::new(source).read_form()
}

/// Read every form in `source`.
pub fn read_all(source: &str) -> Result<Vec<MaltVal>, ParseError> {
    Reader::new(source).read_all()
}

// ============================================================================
// Tests
// ============================================================================
