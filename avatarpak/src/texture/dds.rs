//! DDS texture encoder implementation.

use image::RgbaImage;

use crate::dds::{DdsEncoder, DdsFormat};

use super::{TextureEncoder, TextureError};

/// DDS texture encoder backed by the [`crate::dds`] module.
///
/// # Example
///
/// ```
/// use avatarpak::dds::DdsFormat;
/// use avatarpak::texture::{DdsTextureEncoder, TextureEncoder};
///
/// let encoder = DdsTextureEncoder::new(DdsFormat::BC3);
/// assert_eq!(encoder.extension(), "dds");
/// assert_eq!(encoder.name(), "DDS BC3");
/// ```
#[derive(Debug, Clone)]
pub struct DdsTextureEncoder {
    format: DdsFormat,
}

impl DdsTextureEncoder {
    /// Create a new DDS encoder with the specified compression format.
    pub fn new(format: DdsFormat) -> Self {
        Self { format }
    }

    /// Get the compression format.
    pub fn format(&self) -> DdsFormat {
        self.format
    }
}

impl TextureEncoder for DdsTextureEncoder {
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, TextureError> {
        DdsEncoder::new(self.format)
            .encode(image)
            .map_err(TextureError::from)
    }

    fn extension(&self) -> &str {
        "dds"
    }

    fn name(&self) -> &str {
        match self.format {
            DdsFormat::BC1 => "DDS BC1",
            DdsFormat::BC3 => "DDS BC3",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_encode_through_trait() {
        let encoder: Arc<dyn TextureEncoder> = Arc::new(DdsTextureEncoder::new(DdsFormat::BC3));
        let data = encoder.encode(&RgbaImage::new(64, 64)).unwrap();
        assert_eq!(&data[0..4], b"DDS ");
        assert_eq!(&data[84..88], b"DXT5");
    }

    #[test]
    fn test_name_per_format() {
        assert_eq!(DdsTextureEncoder::new(DdsFormat::BC1).name(), "DDS BC1");
        assert_eq!(DdsTextureEncoder::new(DdsFormat::BC3).name(), "DDS BC3");
    }

    #[test]
    fn test_encode_invalid_dimensions() {
        let encoder = DdsTextureEncoder::new(DdsFormat::BC1);
        let result = encoder.encode(&RgbaImage::new(6, 6));
        assert!(matches!(
            result,
            Err(TextureError::InvalidDimensions { width: 6, .. })
        ));
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DdsTextureEncoder>();
    }
}
