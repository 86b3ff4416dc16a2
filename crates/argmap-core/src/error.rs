//! Error types for argmap
//!
//! The parser itself never fails and the defaulting accessors absorb every
//! malformed input into a defined fallback. Errors exist only on the strict
//! lookup surface (`require_str`, `require_i64`), for callers that want a
//! hard failure instead of a default.

use thiserror::Error;

/// Result type alias for argmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the strict accessors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The option was not present in the parsed input
    #[error("option '{name}' was not given")]
    MissingOption { name: String },

    /// The option is present but its value is not a base-10 integer
    #[error("option '{name}' has non-integer value '{value}'")]
    InvalidInteger { name: String, value: String },
}

impl Error {
    /// Create a missing-option error
    pub fn missing_option(name: impl Into<String>) -> Self {
        Error::MissingOption { name: name.into() }
    }

    /// Create an invalid-integer error
    pub fn invalid_integer(name: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidInteger {
            name: name.into(),
            value: value.into(),
        }
    }
}
