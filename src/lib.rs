//! YAL - a one-keyword toy language
//!
//! This crate re-exports all layers of the YAL system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: yal_runtime     — REPL, CLI, file loading
//! Layer 1: yal_language    — Lexer, tokens, statement dispatcher
//! Layer 0: yal_foundation  — Core types (Integral, Error)
//! ```

pub use yal_foundation as foundation;
pub use yal_language as language;
pub use yal_runtime as runtime;
