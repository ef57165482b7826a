//! Error types for DDS encoding.

use std::fmt;

/// Errors that can occur while encoding a DDS file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdsError {
    /// Image dimensions cannot be block-compressed.
    InvalidDimensions(u32, u32),
    /// Block compression produced an unexpected amount of data.
    CompressionFailed(String),
}

impl fmt::Display for DdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DdsError::InvalidDimensions(w, h) => {
                write!(
                    f,
                    "invalid dimensions {}×{}: must be non-zero multiples of 4",
                    w, h
                )
            }
            DdsError::CompressionFailed(msg) => write!(f, "compression failed: {}", msg),
        }
    }
}

impl std::error::Error for DdsError {}
