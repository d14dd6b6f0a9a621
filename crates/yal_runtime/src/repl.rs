//! The main REPL implementation.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use yal_foundation::{Error, Result};
use yal_language::{Interpreter, InterpreterConfig};

/// Input that ends the REPL.
pub const QUIT_COMMAND: &str = ":quit";

/// The interactive REPL.
///
/// Every line runs on a fresh [`Interpreter`], so nothing buffered by one
/// line can leak into the diagnostics of the next.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Configuration handed to every interpreter.
    config: InterpreterConfig,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            config: InterpreterConfig::default(),
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Sets the interpreter configuration.
    #[must_use]
    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the interpreter configuration.
    #[must_use]
    pub const fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Runs the REPL loop until EOF or [`QUIT_COMMAND`].
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = line.trim();
        if trimmed == QUIT_COMMAND {
            return Ok(false);
        }
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&line);
        self.eval(&line)?;

        Ok(true)
    }

    /// Runs `input` on a fresh interpreter writing to stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the interpreter fails fatally.
    pub fn eval(&self, input: &str) -> Result<bool> {
        self.eval_to(input, io::stdout(), io::stderr())
    }

    /// Runs `input` on a fresh interpreter writing to the given sinks.
    ///
    /// # Errors
    ///
    /// Returns an error if the interpreter fails fatally.
    pub fn eval_to<O: Write, D: Write>(
        &self,
        input: &str,
        output: O,
        diagnostics: D,
    ) -> Result<bool> {
        Interpreter::with_sinks(output, diagnostics)
            .with_config(self.config.clone())
            .run(input)
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        match &error.context {
            Some(context) => eprintln!("\x1b[31mError: {error} {context}\x1b[0m"),
            None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mYAL\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type `- describe <integer>`. Use {QUIT_COMMAND} or Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}

/// Reads a source file the way the interpreter expects it: every line is
/// preceded by a newline, so the first line of the file is line 2.
///
/// Invalid UTF-8 is replaced with U+FFFD, which the lexer reads as an
/// error character.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| attach_source(Error::from(e), path))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(|line| format!("\n{line}")).collect())
}

fn attach_source(error: Error, path: &Path) -> Error {
    let context = error
        .context
        .clone()
        .unwrap_or_default()
        .with_source(path.display().to_string());
    error.with_context(context)
}
