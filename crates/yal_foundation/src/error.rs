//! Error types for the YAL system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;

use thiserror::Error;

/// The main error type for YAL operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an illegal mutation error for the given identifier.
    #[must_use]
    pub fn illegal_mutation(identifier: Option<&str>) -> Self {
        Self::new(ErrorKind::IllegalMutation {
            identifier: identifier.map(str::to_string),
        })
    }

    /// Creates an invalid integer literal error.
    #[must_use]
    pub fn invalid_integer(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInteger { text: text.into() })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorKind::Io(error))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A constructor received a combination of arguments it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Attempt to change the value of an eternal instance.
    #[error("illegal mutation of eternal {}", describe_target(.identifier.as_deref()))]
    IllegalMutation {
        /// Name of the instance, `None` for literals.
        identifier: Option<String>,
    },

    /// Integral lexeme that does not fit the value type.
    #[error("invalid integer literal: {text}")]
    InvalidInteger {
        /// The offending lexeme.
        text: String,
    },

    /// Reading input or writing to an output sink failed.
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn describe_target(identifier: Option<&str>) -> String {
    match identifier {
        Some(name) => format!("'{name}'"),
        None => "literal".to_string(),
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name, if the input came from a file.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Column number in source.
    pub column: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}", self.source.as_deref().unwrap_or("<input>"))?;
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, ":{line}:{col}")?;
        }
        Ok(())
    }
}

/// Result type alias using the YAL error.
pub type Result<T> = std::result::Result<T, Error>;
