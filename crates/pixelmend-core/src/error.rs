//! Error types for pixelmend-core
//!
//! Provides a unified error type for the core data structures.
//! Algorithmic code (kernel evaluation, detection, correction) has no
//! recoverable error conditions; only buffer construction can fail.

use thiserror::Error;

/// pixelmend core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Raw buffer length does not match width * height * 3
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
