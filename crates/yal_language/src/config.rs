//! Configuration for the interpreter.

/// Controls how the [`Interpreter`](crate::Interpreter) treats edge cases
/// and what it writes to the diagnostic sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Keep a trailing bare `-` on the instruction stack.
    ///
    /// When set, the instruction stays buffered and is part of the next
    /// failure dump issued by the same interpreter.
    pub retain_bare_instructions: bool,

    /// Abort the run with an error when an integral lexeme does not fit the
    /// value type, instead of failing only that statement.
    pub strict_integers: bool,

    /// Write the full token dump of each input to the diagnostic sink before
    /// dispatching it.
    pub dump_tokens: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            retain_bare_instructions: true,
            strict_integers: false,
            dump_tokens: false,
        }
    }
}

impl InterpreterConfig {
    /// Creates a configuration that aborts on out-of-range integers.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_integers: true,
            ..Self::default()
        }
    }

    /// Builder method to set whether bare instructions stay buffered.
    #[must_use]
    pub fn with_retain_bare_instructions(mut self, retain: bool) -> Self {
        self.retain_bare_instructions = retain;
        self
    }

    /// Builder method to set strict integer handling.
    #[must_use]
    pub fn with_strict_integers(mut self, strict: bool) -> Self {
        self.strict_integers = strict;
        self
    }

    /// Builder method to enable token dumps.
    #[must_use]
    pub fn with_dump_tokens(mut self, dump: bool) -> Self {
        self.dump_tokens = dump;
        self
    }
}
