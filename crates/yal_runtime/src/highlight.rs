//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use yal_language::{Lexer, TokenKind};

/// Highlighter for YAL syntax.
///
/// Colors each token by the kind the lexer assigns it, so the prompt shows
/// exactly what the interpreter will see.
pub struct YalHighlighter;

impl YalHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let tokens = Lexer::tokenize_all(line);
        if tokens.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut cursor = 0;
        for token in &tokens {
            let span = token.span();
            result.push_str(&line[cursor..span.start]);
            let color = match token.kind() {
                Some(TokenKind::Instruction) => "\x1b[1m",  // bold
                Some(TokenKind::Describe) => "\x1b[32m",    // green
                Some(TokenKind::Integral) => "\x1b[35m",    // magenta
                Some(TokenKind::Error) | None => "\x1b[31m", // red
            };
            result.push_str(color);
            result.push_str(span.text(line));
            result.push_str("\x1b[0m");
            cursor = span.end;
        }
        result.push_str(&line[cursor..]);

        Cow::Owned(result)
    }
}

impl Default for YalHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
