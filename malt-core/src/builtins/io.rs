// malt-core - Reader and I/O built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Reader and I/O: read-string, slurp, readline, time-ms

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};

use malt_parser::{MaltVal, read_str};
use tracing::warn;

use crate::error::{AritySpec, Error, Result, check_arity};
use crate::io::Console;

use super::string_arg;

/// Files of this size or larger are refused by `slurp`.
const MAX_SLURP_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// (read-string s) - parse the first form of s
pub(crate) fn builtin_read_string(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("read-string", AritySpec::Exact(1), args)?;
    Ok(read_str(&string_arg("read-string", &args[0])?)?)
}

/// (slurp path) - the file's contents as a string
pub(crate) fn builtin_slurp(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("slurp", AritySpec::Exact(1), args)?;
    let path = string_arg("slurp", &args[0])?;
    Ok(MaltVal::string(read_file(Path::new(&*path))?))
}

fn read_file(path: &Path) -> Result<String> {
    let shown = path.display();
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::Io(format!("File \"{}\" does not exist", shown)),
        _ => Error::Io(format!("Can not read \"{}\"", shown)),
    })?;
    if metadata.len() >= MAX_SLURP_BYTES {
        return Err(Error::Io("File is too large".to_string()));
    }
    fs::read_to_string(path).map_err(|_| Error::Io(format!("Can not read \"{}\"", shown)))
}

/// (readline prompt) - one line of input, nil at end of input
pub(crate) fn builtin_readline(console: &Console, args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("readline", AritySpec::Exact(1), args)?;
    let prompt = string_arg("readline", &args[0])?;
    Ok(console
        .input
        .read_line(&prompt)
        .map(MaltVal::string)
        .unwrap_or(MaltVal::Nil))
}

static TRUNCATION_WARNING: Once = Once::new();

/// (time-ms) - milliseconds since the epoch, truncated to 32 bits
///
/// The truncation keeps values compatible with programs written against a
/// 32-bit clock. Differences between nearby readings stay correct except
/// across a wrap.
pub(crate) fn builtin_time_ms(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("time-ms", AritySpec::Exact(0), args)?;
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    let truncated = millis as i32 as i64;
    if truncated != millis {
        TRUNCATION_WARNING.call_once(|| {
            warn!(millis, truncated, "time-ms truncated to 32 bits");
        });
    }
    Ok(MaltVal::int(truncated))
}
