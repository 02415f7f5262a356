//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Config/data error (missing config, invalid place set, etc.)
//!
//! A route that cannot be found is not an error. Path finding reports it
//! as data, see [`crate::path::PathResult::NotFound`].

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the wayfind binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Config/data error - missing config file, invalid place set (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfind operations
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown travel mode: {0} (expected: road, sky or water)")]
    UnknownMode(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Config/data errors (exit code 3)
    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

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

impl WayfindError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WayfindError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid configuration
    pub fn invalid_config(reason: impl std::fmt::Display) -> Self {
        WayfindError::InvalidConfig {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_)
            | WayfindError::UnknownMode(_)
            | WayfindError::UsageError(_)
            | WayfindError::InvalidValue { .. } => ExitCode::Usage,

            WayfindError::ConfigNotFound { .. }
            | WayfindError::InvalidConfig { .. }
            | WayfindError::AlreadyExists { .. }
            | WayfindError::NotFound { .. }
            | WayfindError::Toml(_) => ExitCode::Data,

            WayfindError::Io(_)
            | WayfindError::Json(_)
            | WayfindError::FailedOperationWithTarget { .. }
            | WayfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UnknownMode(_) => "unknown_mode",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::InvalidValue { .. } => "invalid_value",
            WayfindError::ConfigNotFound { .. } => "config_not_found",
            WayfindError::InvalidConfig { .. } => "invalid_config",
            WayfindError::AlreadyExists { .. } => "already_exists",
            WayfindError::NotFound { .. } => "not_found",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Toml(_) => "toml_error",
            WayfindError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            WayfindError::Other(_) => "other",
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

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;
