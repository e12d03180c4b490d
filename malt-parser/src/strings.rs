// malt-parser - String literal validation and escaping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! String literals are checked in two phases: quote balance first, then
//! escape decoding. Positions are character indices into the raw token,
//! opening quote included.

use crate::parser::ParseError;

/// Check that a raw string token is a single balanced literal.
pub fn verify_quotes(raw: &str) -> Result<(), ParseError> {
    let chars: Vec<char> = raw.chars().collect();
    let last = chars.len().saturating_sub(1);

    if chars.len() <= 1 {
        return Err(ParseError::UnbalancedString { position: None });
    }
    if chars[0] != '"' {
        return Err(ParseError::UnbalancedString { position: Some(0) });
    }
    if chars[last] != '"' {
        return Err(ParseError::UnbalancedString {
            position: Some(last),
        });
    }

    let mut escaped = false;
    for (pos, &ch) in chars.iter().enumerate() {
        match ch {
            '\\' => escaped = !escaped,
            '"' if escaped => {
                if pos == last {
                    return Err(ParseError::UnbalancedString {
                        position: Some(pos),
                    });
                }
                escaped = false;
            }
            '"' => {
                if pos > 0 && pos < last {
                    return Err(ParseError::UnexpectedEndOfString { position: pos });
                }
            }
            _ => escaped = false,
        }
    }
    Ok(())
}

fn unescape_char(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\'' | '"' | '\\' | ' ' => Some(ch),
        _ => None,
    }
}

/// Decode escape sequences.
///
/// Only `\n`, `\r`, `\t`, `\'`, `\"`, `\\` and `\ ` are accepted; any other
/// escaped character fails with its position.
pub fn unescape(raw: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut escaped = false;
    for (pos, ch) in raw.chars().enumerate() {
        if ch == '\\' && !escaped {
            escaped = true;
            continue;
        }
        if escaped {
            let decoded = unescape_char(ch).ok_or(ParseError::InvalidChar { ch, position: pos })?;
            out.push(decoded);
            escaped = false;
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Validate, decode, then strip the surrounding quotes of a string token.
pub fn read_string_literal(raw: &str) -> Result<String, ParseError> {
    verify_quotes(raw)?;
    let decoded = unescape(raw)?;
    Ok(decoded
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(&decoded)
        .to_string())
}

/// Escape a string for readable printing.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
