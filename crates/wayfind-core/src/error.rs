//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex key, duplicate vertex)

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, WayfindError>;

/// Exit codes for the wayfind CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown or conflicting keys (3)
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

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex not found: {key}")]
    VertexNotFound { key: String },

    #[error("vertex already exists: {key}")]
    DuplicateVertex { key: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_) | WayfindError::UsageError(_) => ExitCode::Usage,

            WayfindError::VertexNotFound { .. } | WayfindError::DuplicateVertex { .. } => {
                ExitCode::Data
            }

            WayfindError::Io(_) | WayfindError::Json(_) | WayfindError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier used in JSON output
    fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::VertexNotFound { .. } => "vertex_not_found",
            WayfindError::DuplicateVertex { .. } => "duplicate_vertex",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Other(_) => "other",
        }
    }

    /// Render the error as a JSON envelope for `--format json` consumers
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            WayfindError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WayfindError::VertexNotFound { key: "A".into() }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WayfindError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_json_envelope() {
        let err = WayfindError::VertexNotFound { key: "Z".into() };
        let value = err.to_json();
        assert_eq!(value["error"]["code"], 3);
        assert_eq!(value["error"]["type"], "vertex_not_found");
        assert_eq!(value["error"]["message"], "vertex not found: Z");
    }
}
