// malt-core - Line input and output
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Pull/push interfaces for line-oriented I/O.
//!
//! The interpreter never touches stdin or stdout directly; printing and
//! `readline` go through an `Input`/`Output` pair held by the interpreter.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// A source of input lines.
pub trait Input {
    /// Show `prompt` and read one line without its terminator.
    /// `None` at end of input.
    fn read_line(&self, prompt: &str) -> Option<String>;
}

/// A sink for output lines.
pub trait Output {
    fn write_line(&self, text: &str);
}

/// The I/O pair handed to primitives that print or read.
#[derive(Clone)]
pub struct Console {
    pub input: Rc<dyn Input>,
    pub output: Rc<dyn Output>,
}

impl Console {
    pub fn new(input: Rc<dyn Input>, output: Rc<dyn Output>) -> Self {
        Console { input, output }
    }

    /// Console backed by the process's stdin and stdout.
    pub fn stdio() -> Self {
        Console::new(Rc::new(StdInput), Rc::new(StdOutput))
    }
}

// ============================================================================
// Standard streams
// ============================================================================

pub struct StdInput;

impl Input for StdInput {
    fn read_line(&self, prompt: &str) -> Option<String> {
        let mut stdout = io::stdout();
        // A prompt that cannot be written still lets us read.
        let _ = write!(stdout, "{}", prompt).and_then(|()| stdout.flush());

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

pub struct StdOutput;

impl Output for StdOutput {
    fn write_line(&self, text: &str) {
        println!("{}", text);
    }
}

// ============================================================================
// In-memory streams
// ============================================================================

/// Input fed from a fixed list of lines.
#[derive(Default)]
pub struct ScriptedInput {
    lines: RefCell<VecDeque<String>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: RefCell::new(lines.into_iter().map(Into::into).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Input for ScriptedInput {
    fn read_line(&self, prompt: &str) -> Option<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.lines.borrow_mut().pop_front()
    }
}

/// Output that records every line written.
#[derive(Default)]
pub struct CapturedOutput {
    lines: RefCell<Vec<String>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        CapturedOutput::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Everything written, one line per entry, newline-joined.
    pub fn text(&self) -> String {
        self.lines.borrow().join("\n")
    }
}

impl Output for CapturedOutput {
    fn write_line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input() {
        let input = ScriptedInput::new(["one", "two"]);
        assert_eq!(input.read_line("> "), Some("one".to_string()));
        assert_eq!(input.read_line(">> "), Some("two".to_string()));
        assert_eq!(input.read_line("> "), None);
        assert_eq!(input.prompts(), vec!["> ", ">> ", "> "]);
    }

    #[test]
    fn test_captured_output() {
        let out = CapturedOutput::new();
        out.write_line("a");
        out.write_line("b");
        assert_eq!(out.lines(), vec!["a", "b"]);
        assert_eq!(out.text(), "a\nb");
    }
}
