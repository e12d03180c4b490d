// malt-core - Printing built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Printing: pr-str, str, prn, println

use malt_parser::{MaltVal, pr_seq};

use crate::error::Result;
use crate::io::Console;

/// (pr-str & xs) - readable forms joined by spaces
pub(crate) fn builtin_pr_str(args: &[MaltVal]) -> Result<MaltVal> {
    Ok(MaltVal::string(pr_seq(args, true, " ")))
}

/// (str & xs) - raw forms concatenated
pub(crate) fn builtin_str(args: &[MaltVal]) -> Result<MaltVal> {
    Ok(MaltVal::string(pr_seq(args, false, "")))
}

/// (prn & xs) - write readable forms as one line
pub(crate) fn builtin_prn(console: &Console, args: &[MaltVal]) -> Result<MaltVal> {
    console.output.write_line(&pr_seq(args, true, " "));
    Ok(MaltVal::Nil)
}

/// (println & xs) - write raw forms as one line
pub(crate) fn builtin_println(console: &Console, args: &[MaltVal]) -> Result<MaltVal> {
    console.output.write_line(&pr_seq(args, false, " "));
    Ok(MaltVal::Nil)
}
