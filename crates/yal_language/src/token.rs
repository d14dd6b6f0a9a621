//! Token types for YAL.
//!
//! Tokens are the output of the lexer and input to the interpreter.

use std::fmt;

use crate::span::Span;

/// Rendering used for a token whose kind was never assigned.
pub const UNCLASSIFIED: &str = "unclassified";

/// A classified, positioned run of source characters.
///
/// Tokens are only built by the lexer and are immutable once emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: Option<TokenKind>,
    text: String,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: Option<TokenKind>, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns the classification, `None` if the token was never classified.
    #[must_use]
    pub const fn kind(&self) -> Option<TokenKind> {
        self.kind
    }

    /// Returns true if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == Some(kind)
    }

    /// Returns the characters consumed into this token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the source location of this token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the 1-based line of the first character.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns the 1-based column of the first character.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.span.column
    }
}

/// Debug rendering: `[<kind> <text>]@<line>:<column>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind.map_or(UNCLASSIFIED, TokenKind::name);
        write!(f, "[{kind} {}]@{}", self.text, self.span)
    }
}

/// Token types for YAL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `-`, opens a statement
    Instruction,
    /// The `describe` keyword
    Describe,
    /// A run of decimal digits
    Integral,
    /// Anything the lexer could not make sense of
    Error,
}

impl TokenKind {
    /// Returns the name used in token dumps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Instruction => "Instruction",
            Self::Describe => "Describe",
            Self::Integral => "Integral",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders tokens one per line, each line terminated by `\n`.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{token}\n")).collect()
}
