// malt-core - Exception built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use malt_parser::MaltVal;

use crate::error::{AritySpec, Error, Result, check_arity};

/// (throw x) - raise x as a user exception
pub(crate) fn builtin_throw(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("throw", AritySpec::Exact(1), args)?;
    Err(Error::Thrown(args[0].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throw_carries_value() {
        let err = builtin_throw(&[MaltVal::int(7)]).unwrap_err();
        assert!(matches!(err, Error::Thrown(MaltVal::Int(7))));
        assert_eq!(err.kind_name(), "UserException");
    }
}
