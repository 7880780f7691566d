//! Schema configuration error types
//!
//! These errors cover misuse of the registry itself - a malformed field
//! table or an attempt to replace a registered variant. Payload problems
//! never surface here: the parse path reports them inside the returned
//! result structure.
//!
//! Error codes:
//! - MUSTER_SCHEMA_INVALID (misconfigured field table)
//! - MUSTER_SCHEMA_IMMUTABLE (variant already registered)

use thiserror::Error;

/// Result type for schema registration operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The field table violates a structural invariant
    #[error("invalid schema for form '{code}' version '{version}': {reason}")]
    InvalidSchema {
        code: String,
        version: String,
        reason: String,
    },

    /// The `(code, version)` variant is already registered
    #[error("schema for form '{code}' version '{version}' is immutable")]
    Immutable { code: String, version: String },
}

impl SchemaError {
    /// Create an invalid-schema error
    pub fn invalid_schema(
        code: impl Into<String>,
        version: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSchema {
            code: code.into(),
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create an immutability violation error
    pub fn immutable(code: impl Into<String>, version: impl Into<String>) -> Self {
        Self::Immutable {
            code: code.into(),
            version: version.into(),
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSchema { .. } => "MUSTER_SCHEMA_INVALID",
            Self::Immutable { .. } => "MUSTER_SCHEMA_IMMUTABLE",
        }
    }
}
