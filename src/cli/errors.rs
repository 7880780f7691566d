//! CLI-specific error types
//!
//! Error codes:
//! - MUSTER_CLI_IO_ERROR
//! - MUSTER_CLI_UNKNOWN_FORM

use std::io;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// stdin/stdout/file I/O failed
    #[error("[MUSTER_CLI_IO_ERROR] {0}")]
    Io(#[from] io::Error),

    /// Result serialization failed
    #[error("[MUSTER_CLI_IO_ERROR] {0}")]
    Json(#[from] serde_json::Error),

    /// No schema registered for the requested form code
    #[error("[MUSTER_CLI_UNKNOWN_FORM] no schema registered for form code '{0}'")]
    UnknownForm(String),
}

impl CliError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) | Self::Json(_) => "MUSTER_CLI_IO_ERROR",
            Self::UnknownForm(_) => "MUSTER_CLI_UNKNOWN_FORM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_form_display() {
        let err = CliError::UnknownForm("99".to_string());
        let display = format!("{}", err);
        assert!(display.contains("MUSTER_CLI_UNKNOWN_FORM"));
        assert!(display.contains("'99'"));
    }
}
