// malt-core - Predicate and conversion built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type predicates: nil?, true?, false?, symbol?, keyword?, number?, string?,
//! fn?, macro?; conversions: symbol, keyword

use malt_parser::MaltVal;

use crate::error::{AritySpec, Error, Result, check_arity};

use super::string_arg;

fn predicate(name: &str, args: &[MaltVal], test: fn(&MaltVal) -> bool) -> Result<MaltVal> {
    check_arity(name, AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(test(&args[0])))
}

pub(crate) fn builtin_nil_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("nil?", args, |v| matches!(v, MaltVal::Nil))
}

pub(crate) fn builtin_true_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("true?", args, |v| matches!(v, MaltVal::Bool(true)))
}

pub(crate) fn builtin_false_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("false?", args, |v| matches!(v, MaltVal::Bool(false)))
}

pub(crate) fn builtin_symbol_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("symbol?", args, |v| matches!(v, MaltVal::Symbol(_)))
}

pub(crate) fn builtin_keyword_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("keyword?", args, |v| matches!(v, MaltVal::Keyword(_)))
}

pub(crate) fn builtin_number_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("number?", args, |v| matches!(v, MaltVal::Int(_)))
}

pub(crate) fn builtin_string_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("string?", args, |v| matches!(v, MaltVal::String(_)))
}

/// Natives and non-macro closures.
pub(crate) fn builtin_fn_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("fn?", args, |v| match v {
        MaltVal::NativeFn(_) => true,
        MaltVal::Closure(c) => !c.is_macro,
        _ => false,
    })
}

pub(crate) fn builtin_macro_p(args: &[MaltVal]) -> Result<MaltVal> {
    predicate("macro?", args, MaltVal::is_macro)
}

// ============================================================================
// Conversion
// ============================================================================

/// (symbol "name")
pub(crate) fn builtin_symbol(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("symbol", AritySpec::Exact(1), args)?;
    Ok(MaltVal::symbol(&string_arg("symbol", &args[0])?))
}

/// (keyword "name") or (keyword :k)
pub(crate) fn builtin_keyword(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("keyword", AritySpec::Exact(1), args)?;
    match &args[0] {
        MaltVal::String(s) => Ok(MaltVal::keyword(s)),
        MaltVal::Keyword(_) => Ok(args[0].clone()),
        other => Err(Error::type_error(
            "keyword",
            "string or keyword",
            other.type_name(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use malt_parser::Vector;

    use crate::env::Env;
    use crate::eval::make_closure;

    fn closure() -> MaltVal {
        make_closure(Vector::new(), MaltVal::Nil, &Env::new())
    }

    #[test]
    fn test_truthiness_predicates_are_exact() {
        assert_eq!(builtin_true_p(&[MaltVal::int(1)]).unwrap(), MaltVal::bool(false));
        assert_eq!(builtin_false_p(&[MaltVal::Nil]).unwrap(), MaltVal::bool(false));
        assert_eq!(builtin_nil_p(&[MaltVal::Nil]).unwrap(), MaltVal::bool(true));
    }

    #[test]
    fn test_fn_and_macro() {
        let f = closure();
        let m = match &f {
            MaltVal::Closure(c) => MaltVal::Closure(c.to_macro()),
            _ => unreachable!(),
        };
        assert_eq!(builtin_fn_p(&[f.clone()]).unwrap(), MaltVal::bool(true));
        assert_eq!(builtin_macro_p(&[f]).unwrap(), MaltVal::bool(false));
        assert_eq!(builtin_fn_p(&[m.clone()]).unwrap(), MaltVal::bool(false));
        assert_eq!(builtin_macro_p(&[m]).unwrap(), MaltVal::bool(true));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            builtin_symbol(&[MaltVal::string("abc")]).unwrap(),
            MaltVal::symbol("abc")
        );
        assert_eq!(
            builtin_keyword(&[MaltVal::string("k")]).unwrap(),
            MaltVal::keyword("k")
        );
        assert_eq!(
            builtin_keyword(&[MaltVal::keyword("k")]).unwrap(),
            MaltVal::keyword("k")
        );
        assert!(builtin_symbol(&[MaltVal::int(1)]).is_err());
    }
}
