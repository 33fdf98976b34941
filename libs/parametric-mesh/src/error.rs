//! # Mesh Errors
//!
//! Error types for mesh and curve generation.
//!
//! ## Error Policy
//!
//! - Invalid parameters are rejected before any geometry is produced
//! - No error is retryable: generation is pure and deterministic

use thiserror::Error;

/// Errors that can occur during geometry generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A shape parameter is outside its valid domain
    #[error("Invalid {shape} parameter `{parameter}`: {message}")]
    InvalidParameter {
        /// Shape family being generated
        shape: &'static str,
        /// Name of the offending parameter
        parameter: &'static str,
        /// Human readable description of the constraint
        message: String,
    },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Writing exported geometry failed
    #[error("Export failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(
        shape: &'static str,
        parameter: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            shape,
            parameter,
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Result type alias for geometry generation.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("sphere", "radius", "must be positive, got -1");
        let text = err.to_string();
        assert!(text.contains("sphere"));
        assert!(text.contains("radius"));
        assert!(text.contains("-1"));

        let err = MeshError::TooManyVertices { count: 20, max: 10 };
        assert_eq!(err.to_string(), "Too many vertices: 20 (max: 10)");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
