//! Error types and result aliases for Vetch operations.
//!
//! Provides a unified error type covering every failure the typed
//! environment accessors can surface, with messages that name the
//! offending variable.

use std::fmt;

use thiserror::Error;

/// Unified error type for all Vetch operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VetchError {
    /// A required variable had no snapshot value and no default was supplied
    #[error("Missing environment variable: {name}")]
    MissingVar { name: &'static str },

    /// A present value could not be coerced to the requested type
    #[error("Invalid environment variable {name}: \"{value}\" is not {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: ValueKind,
    },
}

/// Target type of a failed coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
}

impl ValueKind {
    /// Indefinite-article phrase used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "a boolean",
            ValueKind::Int => "an integer",
            ValueKind::Float => "a number",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for Vetch operations
pub type VetchResult<T> = Result<T, VetchError>;

impl VetchError {
    /// Create a missing-variable error
    pub fn missing(name: &'static str) -> Self {
        Self::MissingVar { name }
    }

    /// Create a validation error for a value that failed coercion
    pub fn invalid(name: &'static str, value: impl Into<String>, expected: ValueKind) -> Self {
        Self::InvalidValue {
            name,
            value: value.into(),
            expected,
        }
    }

    /// The variable name the error is about
    pub fn variable(&self) -> &'static str {
        match self {
            VetchError::MissingVar { name } => name,
            VetchError::InvalidValue { name, .. } => name,
        }
    }
}
