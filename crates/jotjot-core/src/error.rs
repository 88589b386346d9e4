//! Error types and exit codes for jotjot
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/values)
//! - 3: Data/store error (unreadable store, unknown jot id)
//!
//! The similarity analyzer itself never fails; these errors come from the
//! store, configuration and CLI layers around it.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during jotjot operations
#[derive(Error, Debug)]
pub enum JotError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data/store errors (exit code 3)
    #[error("invalid store {path:?}: {reason}")]
    InvalidStore { path: PathBuf, reason: String },

    #[error("jot not found: {id}")]
    JotNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl JotError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        JotError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        JotError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        JotError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a jot id that is not in the store
    pub fn jot_not_found(id: impl Into<String>) -> Self {
        JotError::JotNotFound { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            JotError::UnknownFormat(_)
            | JotError::DuplicateFormat
            | JotError::UsageError(_)
            | JotError::InvalidValue { .. }
            | JotError::Unsupported { .. } => ExitCode::Usage,

            JotError::InvalidStore { .. } | JotError::JotNotFound { .. } => ExitCode::Data,

            JotError::Io(_)
            | JotError::Yaml(_)
            | JotError::Json(_)
            | JotError::Toml(_)
            | JotError::FailedOperationWithTarget { .. }
            | JotError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            JotError::UnknownFormat(_) => "unknown_format",
            JotError::DuplicateFormat => "duplicate_format",
            JotError::UsageError(_) => "usage_error",
            JotError::InvalidValue { .. } => "invalid_value",
            JotError::Unsupported { .. } => "unsupported",
            JotError::InvalidStore { .. } => "invalid_store",
            JotError::JotNotFound { .. } => "jot_not_found",
            JotError::Io(_) => "io_error",
            JotError::Yaml(_) => "yaml_error",
            JotError::Json(_) => "json_error",
            JotError::Toml(_) => "toml_error",
            JotError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            JotError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for jotjot operations
pub type Result<T> = std::result::Result<T, JotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(JotError::DuplicateFormat.exit_code(), ExitCode::Usage);
        assert_eq!(
            JotError::invalid_value("threshold", "NaN").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(JotError::jot_not_found("01J").exit_code(), ExitCode::Data);
        assert_eq!(
            JotError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = JotError::jot_not_found("01HZX").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "jot_not_found");
        assert_eq!(json["error"]["message"], "jot not found: 01HZX");
    }

    #[test]
    fn test_bail_invalid_macro() {
        fn check(value: f64) -> Result<f64> {
            if value.is_nan() {
                crate::bail_invalid!("threshold", value);
            }
            Ok(value)
        }

        let err = check(f64::NAN).unwrap_err();
        assert!(matches!(err, JotError::InvalidValue { .. }));
        assert_eq!(check(0.5).unwrap(), 0.5);
    }
}
