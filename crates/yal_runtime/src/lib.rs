//! REPL and CLI for YAL.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`LineEditor`] - The editor seam the REPL reads through
//! - [`read_source`] - File loading for the CLI

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::YalHighlighter;
pub use repl::{QUIT_COMMAND, Repl, read_source};
