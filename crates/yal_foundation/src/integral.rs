//! The `Integral` value holder.
//!
//! An `Integral` is a signed integer cell that is either bound to a name or
//! anonymous. Anonymous instances are literals and can never be changed,
//! which [`Binding`] encodes directly: only a named binding carries an
//! `eternal` flag.

use std::fmt;

use crate::error::{Error, Result};

/// How an [`Integral`] is bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    /// A named instance, optionally mutable.
    Named {
        /// The name of the instance.
        identifier: String,
        /// Whether the value is fixed after construction.
        eternal: bool,
    },
    /// A literal. Always eternal.
    Anonymous,
}

impl Binding {
    /// Returns the identifier, or `None` for literals.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Named { identifier, .. } => Some(identifier),
            Self::Anonymous => None,
        }
    }

    /// Returns true if the bound value can never change.
    #[must_use]
    pub const fn is_eternal(&self) -> bool {
        match self {
            Self::Named { eternal, .. } => *eternal,
            Self::Anonymous => true,
        }
    }
}

/// A signed integer value holder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Integral {
    binding: Binding,
    value: i64,
}

impl Integral {
    /// The type name used in descriptions.
    pub const TYPE_NAME: &'static str = "Integral";

    /// Creates a new instance from loose parts.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// if `identifier` is `None` and `eternal` is false.
    pub fn new(identifier: Option<String>, eternal: bool, value: i64) -> Result<Self> {
        match identifier {
            Some(identifier) => Ok(Self::named(identifier, eternal, value)),
            None if eternal => Ok(Self::literal(value)),
            None => Err(Error::invalid_argument(
                "an anonymous Integral must be eternal",
            )),
        }
    }

    /// Creates an anonymous, eternal instance.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self {
            binding: Binding::Anonymous,
            value,
        }
    }

    /// Creates a named instance.
    #[must_use]
    pub fn named(identifier: impl Into<String>, eternal: bool, value: i64) -> Self {
        Self {
            binding: Binding::Named {
                identifier: identifier.into(),
                eternal,
            },
            value,
        }
    }

    /// Returns how this instance is bound.
    #[must_use]
    pub const fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Returns the identifier, or `None` for literals.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.binding.identifier()
    }

    /// Returns true if the value can never change.
    #[must_use]
    pub const fn is_eternal(&self) -> bool {
        self.binding.is_eternal()
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Replaces the value.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IllegalMutation`](crate::ErrorKind::IllegalMutation)
    /// if this instance is eternal.
    pub fn set_value(&mut self, value: i64) -> Result<()> {
        if self.is_eternal() {
            return Err(Error::illegal_mutation(self.identifier()));
        }
        self.value = value;
        Ok(())
    }

    /// Renders the human-readable description, e.g. `'foo' (Integral): eternal 123`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Integral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identifier() {
            Some(name) => write!(f, "'{name}' ")?,
            None => write!(f, "literal ")?,
        }
        write!(f, "({}): ", Self::TYPE_NAME)?;
        if self.is_eternal() {
            write!(f, "eternal ")?;
        }
        write!(f, "{}", self.value)
    }
}
