//! Error types shared across Strobo crates.

use std::path::PathBuf;

/// Top-level error type for Strobo operations.
#[derive(Debug, thiserror::Error)]
pub enum StroboError {
    /// Background estimation was requested on a sequence with zero frames.
    #[error("Frame sequence is empty")]
    EmptySequence,

    /// Frames or background do not share spatial dimensions.
    #[error("Dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// A caller-supplied parameter violates its precondition.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using StroboError.
pub type StroboResult<T> = Result<T, StroboError>;

impl StroboError {
    pub fn dimension_mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            expected_width: expected.0,
            expected_height: expected.1,
            actual_width: actual.0,
            actual_height: actual.1,
        }
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
