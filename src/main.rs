// malt - A small Lisp interpreter written in Rust
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::cell::RefCell;
use std::env;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use anyhow::{Context, Result};
use malt_core::{Input, Interpreter, InterpreterConfig, StdOutput};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = "user> ";
const HISTORY_FILE: &str = ".malt_history";

const USAGE: &str = "\
Usage: malt [--skip-init] [--help|-h] [--version|-v] [file [args...]]

With a file, evaluate it and exit; remaining arguments are bound to *ARGV*.
Without one, start an interactive session.

Options:
  --skip-init      Do not evaluate the bootstrap definitions
  -h, --help       Print this message
  -v, --version    Print the version

Set MALT_LOG (e.g. MALT_LOG=debug) to control diagnostic logging.";

/// Parsed command line.
#[derive(Debug, Default)]
struct Options {
    skip_init: bool,
    file: Option<String>,
    argv: Vec<String>,
}

enum Command {
    Run(Options),
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Command {
    let mut opts = Options::default();
    let mut args = args.into_iter();

    // Flags are only recognised before the first positional argument
    for arg in args.by_ref() {
        match arg.as_str() {
            "--help" | "-h" => return Command::Help,
            "--version" | "-v" => return Command::Version,
            "--skip-init" => opts.skip_init = true,
            _ => {
                opts.file = Some(arg);
                break;
            }
        }
    }
    opts.argv = args.collect();
    Command::Run(opts)
}

fn main() {
    init_logging();

    match parse_args(env::args().skip(1)) {
        Command::Help => println!("{}", USAGE),
        Command::Version => println!("malt v{}", VERSION),
        Command::Run(opts) => process::exit(run(opts)),
    }
}

/// Diagnostics go to stderr, filtered by `MALT_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("MALT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a file or the REPL, returning the process exit code.
fn run(opts: Options) -> i32 {
    let editor = match LineEditor::new() {
        Ok(editor) => Rc::new(editor),
        Err(e) => {
            eprintln!("*** {:#}", e);
            return 1;
        }
    };
    let config = InterpreterConfig {
        run_bootstrap: !opts.skip_init,
        argv: opts.argv,
        ..InterpreterConfig::default()
    };
    let malt = match Interpreter::new(config, editor.clone(), Rc::new(StdOutput)) {
        Ok(malt) => malt,
        Err(e) => {
            println!("*** Init failed ({})", e);
            return 1;
        }
    };

    match opts.file {
        Some(file) => run_file(&malt, &file),
        None => {
            run_repl(&malt, &editor);
            0
        }
    }
}

fn run_file(malt: &Interpreter, file: &str) -> i32 {
    debug!(file, "loading");
    match malt.load_file(file) {
        Ok(_) => 0,
        Err(e) => {
            println!("*** Error: {}", e);
            1
        }
    }
}

fn run_repl(malt: &Interpreter, editor: &LineEditor) {
    println!("malt v{}", VERSION);

    while let Some(line) = editor.read_line(PROMPT) {
        if line.trim().is_empty() {
            continue;
        }
        editor.add_history(&line);
        match malt.rep(&line) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => println!("*** {}", e),
        }
    }

    if let Err(e) = editor.save_history() {
        debug!(error = %e, "history not saved");
    }
    println!("** Exiting.");
}

// ============================================================================
// Line editing
// ============================================================================

/// A rustyline editor shared between the REPL loop and `readline`.
struct LineEditor {
    editor: RefCell<DefaultEditor>,
    history: Option<PathBuf>,
}

impl LineEditor {
    fn new() -> Result<Self> {
        let mut editor = DefaultEditor::new().context("could not initialise line editor")?;
        let history = env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE));
        if let Some(path) = &history
            && let Err(e) = editor.load_history(path)
        {
            debug!(error = %e, "no history loaded");
        }
        Ok(LineEditor {
            editor: RefCell::new(editor),
            history,
        })
    }

    fn add_history(&self, line: &str) {
        // Duplicate or ignored entries are not errors worth reporting
        let _ = self.editor.borrow_mut().add_history_entry(line);
    }

    fn save_history(&self) -> Result<()> {
        if let Some(path) = &self.history {
            self.editor
                .borrow_mut()
                .save_history(path)
                .with_context(|| format!("saving history to {}", path.display()))?;
        }
        Ok(())
    }
}

impl Input for LineEditor {
    fn read_line(&self, prompt: &str) -> Option<String> {
        match self.editor.borrow_mut().readline(prompt) {
            Ok(line) => Some(line),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => None,
            Err(e) => {
                debug!(error = %e, "readline failed");
                None
            }
        }
    }
}
