// malt-parser - Tokenizer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Regex-driven tokenizer.
//!
//! A single pass splits source text into raw token strings. Whitespace and
//! commas separate tokens and are dropped; everything else, including
//! comments, is kept for the reader to classify.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\s,]*(~@|[\[\]{}()'`~^@]|"(?:\\.|[^\\"])*"?|;.*|[^\s\[\]{}('"`,;)]*)"#)
        .expect("token pattern is valid")
});

/// A raw token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn is_comment(&self) -> bool {
        self.text.starts_with(';')
    }
}

/// Splits source text into tokens.
pub struct Lexer;

impl Lexer {
    /// Tokenize the whole input.
    ///
    /// An unterminated string is kept as a token so the reader can report
    /// it with a position rather than losing it here.
    pub fn tokenize(source: &str) -> Vec<Token> {
        TOKEN_RE
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .filter(|m| !m.as_str().is_empty())
            .map(|m| Token {
                text: m.as_str().trim_end_matches([' ', '\n', '\t', ',']).to_string(),
                offset: m.start(),
            })
            .filter(|token| !token.text.is_empty())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        Lexer::tokenize(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_delimiters_and_atoms() {
        assert_eq!(texts("(+ 1 [2 {:a 3}])"), vec![
            "(", "+", "1", "[", "2", "{", ":a", "3", "}", "]", ")"
        ]);
    }

    #[test]
    fn test_commas_are_whitespace() {
        assert_eq!(texts("1,2 ,, 3"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_splice_unquote_is_one_token() {
        assert_eq!(texts("~@xs ~x"), vec!["~@", "xs", "~", "x"]);
    }

    #[test]
    fn test_prefix_characters() {
        assert_eq!(texts("'a `b @c ^d"), vec!["'", "a", "`", "b", "@", "c", "^", "d"]);
    }

    #[test]
    fn test_string_with_escapes() {
        assert_eq!(texts(r#""a \"b\" c" d"#), vec![r#""a \"b\" c""#, "d"]);
    }

    #[test]
    fn test_unterminated_string_kept() {
        assert_eq!(texts(r#"(foo "bar"#), vec!["(", "foo", r#""bar"#]);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let tokens = Lexer::tokenize("1 ; a comment\n2");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_comment());
        assert_eq!(tokens[2].text, "2");
    }

    #[test]
    fn test_offsets() {
        let tokens = Lexer::tokenize("  (ab)");
        assert_eq!(tokens[0].offset, 2);
        assert_eq!(tokens[1].offset, 3);
        assert_eq!(tokens[2].offset, 5);
    }

    #[test]
    fn test_blank_input() {
        assert!(Lexer::tokenize("   ,\n\t").is_empty());
    }
}
