//! Error types and exit codes for senda
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/input error (missing vertex, invalid graph file, bad matrix)
//!
//! "No solution" outcomes (unreachable goal, disconnected MST, no
//! Hamiltonian cycle, unreachable sink) are ordinary result values, not
//! errors; this enum only covers structural misuse, invalid input, and
//! interrupted runs.

use thiserror::Error;

/// Exit codes for the senda CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/input error - missing vertex, invalid graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

#[derive(Debug, Error)]
pub enum SendaError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Structural errors (exit code 3): the operation references graph
    // state that does not exist or already exists.
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("vertex already exists: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("edge already exists: ({from}, {to}, {weight})")]
    DuplicateEdge {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("an undirected graph cannot have self-loops: {vertex}")]
    SelfLoop { vertex: String },

    // Input validation (exit code 3)
    #[error("negative edge weight ({from}, {to}, {weight}): all solvers assume non-negative weights")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid cost matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("{operation} requires an undirected graph")]
    DirectedUnsupported { operation: String },

    #[error("graph has {count} vertices; {operation} supports at most {max}")]
    TooManyVertices {
        operation: String,
        count: usize,
        max: usize,
    },

    #[error("invalid graph file {path}: {reason}")]
    InvalidGraphFile { path: String, reason: String },

    // Run control (exit code 1)
    #[error("run cancelled")]
    Cancelled,

    #[error("deadline exceeded after {expanded} expansions")]
    DeadlineExceeded { expanded: usize },

    #[error("expansion limit of {limit} exceeded")]
    ExpansionLimitExceeded { limit: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SendaError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SendaError::UsageError(_) => ExitCode::Usage,

            SendaError::VertexNotFound { .. }
            | SendaError::DuplicateVertex { .. }
            | SendaError::DuplicateEdge { .. }
            | SendaError::SelfLoop { .. }
            | SendaError::NegativeWeight { .. }
            | SendaError::InvalidMatrix { .. }
            | SendaError::DirectedUnsupported { .. }
            | SendaError::TooManyVertices { .. }
            | SendaError::InvalidGraphFile { .. } => ExitCode::Data,

            SendaError::Cancelled
            | SendaError::DeadlineExceeded { .. }
            | SendaError::ExpansionLimitExceeded { .. }
            | SendaError::Io(_)
            | SendaError::Json(_)
            | SendaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in the JSON envelope
    fn error_type(&self) -> &'static str {
        match self {
            SendaError::UsageError(_) => "usage_error",
            SendaError::VertexNotFound { .. } => "vertex_not_found",
            SendaError::DuplicateVertex { .. } => "duplicate_vertex",
            SendaError::DuplicateEdge { .. } => "duplicate_edge",
            SendaError::SelfLoop { .. } => "self_loop",
            SendaError::NegativeWeight { .. } => "negative_weight",
            SendaError::InvalidMatrix { .. } => "invalid_matrix",
            SendaError::DirectedUnsupported { .. } => "directed_unsupported",
            SendaError::TooManyVertices { .. } => "too_many_vertices",
            SendaError::InvalidGraphFile { .. } => "invalid_graph_file",
            SendaError::Cancelled => "cancelled",
            SendaError::DeadlineExceeded { .. } => "deadline_exceeded",
            SendaError::ExpansionLimitExceeded { .. } => "expansion_limit_exceeded",
            SendaError::Io(_) => "io_error",
            SendaError::Json(_) => "json_error",
            SendaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for senda operations
pub type Result<T> = std::result::Result<T, SendaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let err = SendaError::VertexNotFound {
            vertex: "A".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);

        let err = SendaError::UsageError("bad flag".to_string());
        assert_eq!(err.exit_code(), ExitCode::Usage);

        let err = SendaError::Cancelled;
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = SendaError::VertexNotFound {
            vertex: "Z".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "vertex_not_found");
        assert_eq!(json["error"]["message"], "vertex not found: Z");
    }
}
