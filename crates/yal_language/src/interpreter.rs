//! Statement dispatcher for YAL.
//!
//! The interpreter walks the token sequence against the grammar
//! `Instruction [Describe [Integral]]`, repeated. Every token taken while
//! matching a statement is pushed onto the instruction stack. A statement
//! that does not match dumps the stack to the diagnostic sink, and the walk
//! resumes with the next token. The result of a run is the conjunction of
//! all statement outcomes.

use std::io::{self, Stderr, Stdout, Write};

use yal_foundation::{Error, ErrorContext, Integral, Result};

use crate::config::InterpreterConfig;
use crate::lexer::lex;
use crate::token::{Token, TokenKind, render};

/// Executes YAL source, writing descriptions to `O` and failure dumps to `D`.
pub struct Interpreter<O: Write = Stdout, D: Write = Stderr> {
    /// Sink for `describe` output.
    output: O,

    /// Sink for token dumps of failed statements.
    diagnostics: D,

    /// Tokens consumed by the statement being matched.
    stack: Vec<Token>,

    config: InterpreterConfig,
}

impl Interpreter<Stdout, Stderr> {
    /// Creates an interpreter writing to the process's stdout and stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sinks(io::stdout(), io::stderr())
    }
}

impl Default for Interpreter<Stdout, Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, D: Write> Interpreter<O, D> {
    /// Creates an interpreter writing to the given sinks.
    pub fn with_sinks(output: O, diagnostics: D) -> Self {
        Self {
            output,
            diagnostics,
            stack: Vec::new(),
            config: InterpreterConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Returns the tokens currently buffered on the instruction stack.
    #[must_use]
    pub fn pending(&self) -> &[Token] {
        &self.stack
    }

    /// Consumes the interpreter and returns its output and diagnostic sinks.
    pub fn into_sinks(self) -> (O, D) {
        (self.output, self.diagnostics)
    }

    /// Lexes and executes `source`.
    ///
    /// Returns `Ok(true)` if every statement matched the grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to a sink fails, or, with
    /// [`InterpreterConfig::strict_integers`], if an integral lexeme does not
    /// fit the value type.
    pub fn run(&mut self, source: &str) -> Result<bool> {
        let tokens = lex(source);
        if self.config.dump_tokens {
            self.diagnostics.write_all(render(&tokens).as_bytes())?;
        }
        self.run_tokens(tokens)
    }

    /// Executes an already lexed token sequence.
    ///
    /// # Errors
    ///
    /// See [`Interpreter::run`].
    pub fn run_tokens(&mut self, tokens: Vec<Token>) -> Result<bool> {
        let mut tokens = tokens.into_iter();
        let mut success = true;
        while let Some(token) = tokens.next() {
            success &= self.statement(token, &mut tokens)?;
        }
        Ok(success)
    }

    /// Matches one statement starting at `first`.
    fn statement(
        &mut self,
        first: Token,
        rest: &mut impl Iterator<Item = Token>,
    ) -> Result<bool> {
        let opens = first.is(TokenKind::Instruction);
        self.stack.push(first);
        if !opens {
            return self.reject();
        }

        let Some(instruction) = rest.next() else {
            return Ok(self.bare_instruction());
        };
        let describes = instruction.is(TokenKind::Describe);
        self.stack.push(instruction);
        if !describes {
            return self.reject();
        }

        let Some(operand) = rest.next() else {
            return self.reject();
        };
        let integral = operand.is(TokenKind::Integral);
        self.stack.push(operand);
        if !integral {
            return self.reject();
        }
        self.describe_top()
    }

    /// A lone `-` at the end of the input.
    fn bare_instruction(&mut self) -> bool {
        if !self.config.retain_bare_instructions {
            self.stack.clear();
        }
        true
    }

    /// Describes the integral literal on top of the stack.
    fn describe_top(&mut self) -> Result<bool> {
        let Some(operand) = self.stack.last() else {
            return self.reject();
        };

        let value = match operand.text().parse::<i64>() {
            Ok(value) => value,
            Err(_) if self.config.strict_integers => {
                let error = Error::invalid_integer(operand.text()).with_context(
                    ErrorContext::new().with_position(operand.line(), operand.column()),
                );
                self.reject()?;
                return Err(error);
            }
            Err(_) => return self.reject(),
        };

        writeln!(self.output, "{}", Integral::literal(value).describe())?;
        self.stack.clear();
        Ok(true)
    }

    /// Dumps the stack to the diagnostic sink and fails the statement.
    fn reject(&mut self) -> Result<bool> {
        for token in self.stack.drain(..) {
            writeln!(self.diagnostics, "{token}")?;
        }
        Ok(false)
    }
}
