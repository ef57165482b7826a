//! Error types for texture encoding.

use std::fmt;

use crate::dds::DdsError;

/// Errors that can occur while encoding pixel data into a texture format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// Image dimensions are invalid for the target format.
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },
    /// Encoding operation failed.
    EncodingFailed(String),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "invalid dimensions {}×{}: {}", width, height, reason)
            }
            TextureError::EncodingFailed(msg) => write!(f, "encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for TextureError {}

impl From<DdsError> for TextureError {
    fn from(err: DdsError) -> Self {
        match err {
            DdsError::InvalidDimensions(w, h) => TextureError::InvalidDimensions {
                width: w,
                height: h,
                reason: "not block-compressible".to_string(),
            },
            DdsError::CompressionFailed(msg) => TextureError::EncodingFailed(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_display() {
        let err = TextureError::InvalidDimensions {
            width: 10,
            height: 8,
            reason: "not block-compressible".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid dimensions 10×8: not block-compressible"
        );
    }

    #[test]
    fn test_encoding_failed_display() {
        let err = TextureError::EncodingFailed("truncated block data".to_string());
        assert_eq!(err.to_string(), "encoding failed: truncated block data");
    }

    #[test]
    fn test_from_dds_error() {
        let err: TextureError = DdsError::InvalidDimensions(0, 0).into();
        assert!(matches!(err, TextureError::InvalidDimensions { .. }));

        let err: TextureError = DdsError::CompressionFailed("test".to_string()).into();
        assert!(matches!(err, TextureError::EncodingFailed(_)));
    }
}
