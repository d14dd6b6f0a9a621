//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Integral and Error.

mod errors;
