//! Error types and exit codes for campus-nav
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed commands)
//! - 3: Data/graph error (missing vertex, duplicate edge, bad record, etc.)

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the campus-nav binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/graph error - unknown vertex, duplicate edge (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campus-nav operations
#[derive(Error, Debug)]
pub enum NavError {
    // Graph store errors (exit code 3)
    #[error("vertex already exists: {name}")]
    DuplicateVertex { name: String },

    #[error("vertex not found: {name}")]
    VertexNotFound { name: String },

    #[error("vertex id out of range: {id}")]
    IdOutOfRange { id: VertexId },

    #[error("edge already exists: {from} - {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("edge not found: {from} - {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("edge would be a self-loop on {name}")]
    SelfLoop { name: String },

    #[error("invalid start vertex: {id}")]
    InvalidVertex { id: VertexId },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

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

impl NavError {
    /// Create an error for a missing vertex name
    pub fn vertex_not_found(name: impl Into<String>) -> Self {
        NavError::VertexNotFound { name: name.into() }
    }

    /// Create an error for a missing edge between two named vertices
    pub fn edge_not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        NavError::EdgeNotFound {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NavError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NavError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NavError::UnknownFormat(_)
            | NavError::UsageError(_)
            | NavError::InvalidValue { .. } => ExitCode::Usage,

            NavError::DuplicateVertex { .. }
            | NavError::VertexNotFound { .. }
            | NavError::IdOutOfRange { .. }
            | NavError::DuplicateEdge { .. }
            | NavError::EdgeNotFound { .. }
            | NavError::SelfLoop { .. }
            | NavError::InvalidVertex { .. } => ExitCode::Data,

            NavError::Io(_)
            | NavError::Json(_)
            | NavError::Toml(_)
            | NavError::FailedOperationWithTarget { .. }
            | NavError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NavError::DuplicateVertex { .. } => "duplicate_vertex",
            NavError::VertexNotFound { .. } => "vertex_not_found",
            NavError::IdOutOfRange { .. } => "id_out_of_range",
            NavError::DuplicateEdge { .. } => "duplicate_edge",
            NavError::EdgeNotFound { .. } => "edge_not_found",
            NavError::SelfLoop { .. } => "self_loop",
            NavError::InvalidVertex { .. } => "invalid_vertex",
            NavError::UnknownFormat(_) => "unknown_format",
            NavError::UsageError(_) => "usage_error",
            NavError::InvalidValue { .. } => "invalid_value",
            NavError::Io(_) => "io_error",
            NavError::Json(_) => "json_error",
            NavError::Toml(_) => "toml_error",
            NavError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NavError::Other(_) => "other",
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

/// Result type alias for campus-nav operations
pub type Result<T> = std::result::Result<T, NavError>;
