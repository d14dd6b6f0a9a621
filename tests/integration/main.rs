//! Integration tests across layers
//!
//! Tests that exercise file loading, the REPL evaluation path and the
//! interpreter together.
