//! Lexer for YAL.
//!
//! The lexer is a character-level state machine. It keeps at most one
//! pending token open, appends characters to it until a delimiter arrives,
//! and never fails: anything it cannot classify becomes an `Error` token.
//!
//! The only keyword is [`KEYWORD`]. A pending token tracks how much of it
//! has been matched so far ([`State::Keyword`]); the token is emitted as
//! `Describe` the moment the last letter lands. A keyword prefix that is cut
//! off by a delimiter is emitted as `Error`.

use std::str::CharIndices;

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// The single keyword of the language.
pub const KEYWORD: &str = "describe";

/// Classification of the pending token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Instruction,
    Integral,
    /// Number of keyword characters matched so far.
    Keyword(usize),
    /// Absorbing; only a delimiter ends it.
    Error,
}

impl State {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Instruction => TokenKind::Instruction,
            Self::Integral => TokenKind::Integral,
            Self::Keyword(matched) if matched == KEYWORD.len() => TokenKind::Describe,
            Self::Keyword(_) | Self::Error => TokenKind::Error,
        }
    }

    /// Transition on a digit.
    const fn digit(current: Option<Self>) -> Self {
        match current {
            None | Some(Self::Integral) => Self::Integral,
            Some(_) => Self::Error,
        }
    }

    /// Transition on any character that is neither a digit nor a delimiter.
    fn letter(current: Option<Self>, c: char) -> Self {
        let matched = match current {
            None => 0,
            Some(Self::Keyword(matched)) => matched,
            Some(_) => return Self::Error,
        };
        if KEYWORD[matched..].starts_with(c) {
            Self::Keyword(matched + 1)
        } else {
            Self::Error
        }
    }
}

/// A token under construction.
struct Pending {
    state: Option<State>,
    text: String,
    span: Span,
}

impl Pending {
    fn finish(self) -> Token {
        Token::new(self.state.map(State::kind), self.text, self.span)
    }
}

/// Lexer for YAL source code.
pub struct Lexer<'src> {
    /// Remaining characters with their byte offsets.
    chars: CharIndices<'src>,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Token being built, if any.
    pending: Option<Pending>,
    /// Tokens emitted so far.
    tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.char_indices(),
            line: 1,
            column: 1,
            pending: None,
            tokens: Vec::new(),
        }
    }

    /// Consumes the whole source and returns the emitted tokens.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some((offset, c)) = self.chars.next() {
            self.step(offset, c);
        }
        self.finish_token();
        self.tokens
    }

    /// Tokenizes all source and returns a vector of tokens.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize()
    }

    fn step(&mut self, offset: usize, c: char) {
        match c {
            '\n' => {
                self.finish_token();
                self.line += 1;
                self.column = 1;
            }
            ' ' => {
                self.finish_token();
                self.column += 1;
            }
            '-' => {
                self.finish_token();
                self.advance(offset, c, |_| State::Instruction);
                self.finish_token();
            }
            '0'..='9' => {
                self.advance(offset, c, State::digit);
            }
            c => {
                let state = self.advance(offset, c, |current| State::letter(current, c));
                if state.kind() == TokenKind::Describe {
                    self.finish_token();
                }
            }
        }
    }

    /// Opens a pending token if none is open, moves it to the state chosen by
    /// `transition`, and appends `c`.
    fn advance(
        &mut self,
        offset: usize,
        c: char,
        transition: impl FnOnce(Option<State>) -> State,
    ) -> State {
        let (line, column) = (self.line, self.column);
        let pending = self.pending.get_or_insert_with(|| Pending {
            state: None,
            text: String::new(),
            span: Span::empty_at(offset, line, column),
        });
        let state = transition(pending.state);
        pending.state = Some(state);
        pending.text.push(c);
        pending.span.end = offset + c.len_utf8();
        self.column += 1;
        state
    }

    fn finish_token(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.tokens.push(pending.finish());
        }
    }
}

/// Tokenizes `source`. Never fails.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::tokenize_all(source)
}
