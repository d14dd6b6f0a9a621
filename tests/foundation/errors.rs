//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use std::io;
use yal_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("anonymous and mutable");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert!(err.context.is_none());
    let msg = format!("{err}");
    assert!(msg.contains("anonymous and mutable"));
}

#[test]
fn error_illegal_mutation() {
    let err = Error::illegal_mutation(Some("counter"));
    assert!(matches!(err.kind, ErrorKind::IllegalMutation { .. }));
    assert!(format!("{err}").contains("'counter'"));
}

#[test]
fn error_invalid_integer() {
    let err = Error::invalid_integer("18446744073709551616");
    assert!(matches!(err.kind, ErrorKind::InvalidInteger { ref text } if text == "18446744073709551616"));
    assert!(format!("{err}").contains("18446744073709551616"));
}

#[test]
fn error_internal() {
    let err = Error::internal("editor closed");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    assert_eq!(format!("{err}"), "internal error: editor closed");
}

#[test]
fn error_from_io_keeps_source() {
    let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
    assert!(std::error::Error::source(&err.kind).is_some());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new().with_source("prog.yal").with_position(3, 12);
    assert_eq!(format!("{ctx}"), "at prog.yal:3:12");
}

#[test]
fn error_context_without_position() {
    let ctx = ErrorContext::new().with_source("prog.yal");
    assert_eq!(format!("{ctx}"), "at prog.yal");
}

#[test]
fn error_context_does_not_change_message() {
    let err = Error::invalid_integer("9".repeat(30))
        .with_context(ErrorContext::new().with_position(1, 12));
    assert!(!format!("{err}").contains("1:12"));
    assert_eq!(err.context.and_then(|c| c.column), Some(12));
}
