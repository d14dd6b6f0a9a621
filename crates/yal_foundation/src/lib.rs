//! Core types for YAL.
//!
//! This crate provides:
//! - [`Integral`] - The value holder rendered by `describe`
//! - [`Binding`] - Named or anonymous binding of an [`Integral`]
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integral;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use integral::{Binding, Integral};
