//! Lexer and statement dispatcher for YAL.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of YAL source into [`Token`]s
//! - [`Interpreter`] - Matching statements and rendering `describe` output
//! - [`InterpreterConfig`] - Edge-case policies and diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod interpreter;
pub mod lexer;
pub mod span;
pub mod token;

pub use config::InterpreterConfig;
pub use interpreter::Interpreter;
pub use lexer::{KEYWORD, Lexer, lex};
pub use span::Span;
pub use token::{Token, TokenKind, UNCLASSIFIED, render};
