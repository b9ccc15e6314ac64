//! Error types for planar-mirror.

use thiserror::Error;

/// The main error type for mirror operations.
#[derive(Error, Debug)]
pub enum MirrorError {
    /// The mirror transform does not define a usable plane (zero-length normal).
    #[error("degenerate mirror plane - the world transform has no usable +Z axis")]
    DegeneratePlane,

    /// A stereo pass was requested with the wrong number of eye cameras.
    #[error("stereo presentation expects {expected} eye cameras, got {actual}")]
    EyeCountMismatch { expected: usize, actual: usize },

    /// A camera transform could not be inverted.
    #[error("camera world transform is singular")]
    SingularTransform,

    /// Mirror options failed validation.
    #[error("invalid mirror options: {0}")]
    InvalidOptions(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for mirror operations.
pub type Result<T> = std::result::Result<T, MirrorError>;
