// malt-core - Interpreter context
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The interpreter context: a root environment plus the console it prints
//! to, built once per session.

use std::rc::Rc;

use malt_parser::{MaltVal, Symbol, pr_str, read_all, read_str};
use tracing::debug;

use crate::builtins::{register_builtins, register_console_builtins};
use crate::env::{Env, WeakEnv};
use crate::error::{AritySpec, Error, Result, check_arity};
use crate::eval::eval;
use crate::io::{Console, Input, Output};

/// Definitions written in malt itself, evaluated once at startup.
const BOOTSTRAP: &str = include_str!("bootstrap.malt");

/// Settings for a new interpreter.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Evaluate the bootstrap definitions (`load-file`, `cond`).
    pub run_bootstrap: bool,
    /// Bound to `*ARGV*` as a list of strings.
    pub argv: Vec<String>,
    /// Bound to `*host-language*`.
    pub host_language: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            run_bootstrap: true,
            argv: Vec::new(),
            host_language: "rust".to_string(),
        }
    }
}

/// A read-eval-print session.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use malt_core::{CapturedOutput, Interpreter, InterpreterConfig, ScriptedInput};
///
/// let out = Rc::new(CapturedOutput::new());
/// let malt = Interpreter::new(
///     InterpreterConfig::default(),
///     Rc::new(ScriptedInput::default()),
///     out.clone(),
/// )
/// .unwrap();
///
/// assert_eq!(malt.rep("(+ 1 2)").unwrap().as_deref(), Some("3"));
/// malt.rep("(prn :hi)").unwrap();
/// assert_eq!(out.lines(), vec![":hi"]);
/// ```
pub struct Interpreter {
    env: Env,
    console: Console,
}

impl Interpreter {
    pub fn new(
        config: InterpreterConfig,
        input: Rc<dyn Input>,
        output: Rc<dyn Output>,
    ) -> Result<Self> {
        let env = Env::new();
        let console = Console::new(input, output);

        register_builtins(&env);
        register_console_builtins(&env, &console);
        define_eval(&env, env.downgrade());

        env.define(
            Symbol::new("*host-language*"),
            MaltVal::string(config.host_language.as_str()),
        );
        env.define(
            Symbol::new("*ARGV*"),
            MaltVal::list(
                config
                    .argv
                    .iter()
                    .map(|arg| MaltVal::string(arg.as_str()))
                    .collect(),
            ),
        );

        let interp = Interpreter { env, console };
        if config.run_bootstrap {
            interp.bootstrap()?;
        }
        Ok(interp)
    }

    fn bootstrap(&self) -> Result<()> {
        for form in read_all(BOOTSTRAP)? {
            let val = eval(&form, &self.env)?;
            debug!(value = %val, "bootstrap");
        }
        Ok(())
    }

    /// The root environment.
    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Parse the first form of `source`; `MaltVal::Eof` when there is none.
    pub fn read(&self, source: &str) -> Result<MaltVal> {
        Ok(read_str(source)?)
    }

    /// Evaluate a form in the root environment.
    pub fn eval(&self, form: &MaltVal) -> Result<MaltVal> {
        eval(form, &self.env)
    }

    /// Readable text for a value.
    pub fn print(&self, val: &MaltVal) -> String {
        pr_str(val, true)
    }

    /// Read and evaluate. `None` for blank or comment-only input.
    pub fn re(&self, source: &str) -> Result<Option<MaltVal>> {
        match self.read(source)? {
            MaltVal::Eof => Ok(None),
            form => self.eval(&form).map(Some),
        }
    }

    /// Read, evaluate and print.
    pub fn rep(&self, source: &str) -> Result<Option<String>> {
        Ok(self.re(source)?.map(|val| self.print(&val)))
    }

    /// Evaluate every form in `source`, returning the last value.
    pub fn eval_str(&self, source: &str) -> Result<MaltVal> {
        let mut result = MaltVal::Nil;
        for form in read_all(source)? {
            result = self.eval(&form)?;
        }
        Ok(result)
    }

    /// Evaluate a file through the `load-file` definition.
    pub fn load_file(&self, path: &str) -> Result<MaltVal> {
        let form = MaltVal::list(vec![MaltVal::symbol("load-file"), MaltVal::string(path)]);
        self.eval(&form)
    }
}

/// Bind `eval`, which evaluates its argument in the root environment.
fn define_eval(env: &Env, root: WeakEnv) {
    env.define_native("eval", move |args| {
        check_arity("eval", AritySpec::Exact(1), args)?;
        let env = root
            .upgrade()
            .ok_or_else(|| Error::Evaluation("eval: interpreter has been dropped".into()))?;
        eval(&args[0], &env)
    });
}

// ============================================================================
// Tests
// ============================================================================
