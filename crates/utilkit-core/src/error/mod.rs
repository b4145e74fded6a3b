//! Error types and result aliases for utilkit operations.
//!
//! The two core kinds (`InvalidArgument`, `DivisionByZero`) render the exact
//! messages existing callers match on. The remaining variants are raised
//! while loading documents into core types.

use std::fmt;
use thiserror::Error;

/// Shape an argument was required to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A sequence of values
    Array,
    /// A character sequence
    String,
    /// A sequence of user records
    Users,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Expected::Array => "Input must be an array",
            Expected::String => "Input must be a string",
            Expected::Users => "Users must be an array",
        };
        f.write_str(message)
    }
}

/// Unified error type for all utilkit operations
#[derive(Error, Debug)]
pub enum UtilError {
    // Core errors
    #[error("{expected}")]
    InvalidArgument { expected: Expected },

    #[error("Cannot divide by zero")]
    DivisionByZero,

    // Document errors
    #[error("Failed to parse JSON document: {message}")]
    JsonParse { message: String },

    #[error("Failed to parse TOML document: {message} at line {line}, column {column}")]
    TomlParse {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Record field '{field}' is invalid: {reason}")]
    RecordValidation { field: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for utilkit operations
pub type UtilResult<T> = Result<T, UtilError>;

impl UtilError {
    /// Create an invalid-argument error for the given expected shape
    pub fn invalid(expected: Expected) -> Self {
        Self::InvalidArgument { expected }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if this error is a precondition violated by the caller.
    ///
    /// These are never transient; retrying the same call fails the same way.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            UtilError::InvalidArgument { .. } | UtilError::DivisionByZero
        )
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            UtilError::InvalidArgument {
                expected: Expected::Array | Expected::Users,
            } => Some("Pass a list; wrap single values in a one-element list"),
            UtilError::InvalidArgument {
                expected: Expected::String,
            } => Some("Pass text; convert numbers and other values to a string first"),
            UtilError::DivisionByZero => Some("Check the divisor before calling divide"),
            UtilError::TomlParse { .. } => Some("Fix the TOML syntax at the reported location"),
            UtilError::RecordValidation { .. } => {
                Some("Every user needs a name, a non-negative age and an email address")
            },
            _ => None,
        }
    }
}
