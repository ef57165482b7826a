//! Block-compressing DDS encoder.

use image::RgbaImage;
use intel_tex_2::{bc1, bc3, RgbaSurface};

use super::header::{DdsHeader, HEADER_SIZE};
use super::{DdsError, DdsFormat};

/// Encodes RGBA images into single-level DDS files.
///
/// # Example
///
/// ```
/// use avatarpak::dds::{DdsEncoder, DdsFormat};
/// use image::RgbaImage;
///
/// let encoder = DdsEncoder::new(DdsFormat::BC1);
/// let data = encoder.encode(&RgbaImage::new(4, 4)).unwrap();
/// assert_eq!(data.len(), 136); // 128-byte header + one block
/// ```
#[derive(Debug, Clone)]
pub struct DdsEncoder {
    format: DdsFormat,
}

impl DdsEncoder {
    /// Create an encoder for the given compression format.
    pub fn new(format: DdsFormat) -> Self {
        Self { format }
    }

    /// Get the compression format.
    pub fn format(&self) -> DdsFormat {
        self.format
    }

    /// Encode an image into a complete DDS file.
    ///
    /// Block compression operates on 4×4 pixel blocks, so both dimensions
    /// must be non-zero multiples of 4.
    pub fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, DdsError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
            return Err(DdsError::InvalidDimensions(width, height));
        }

        let surface = RgbaSurface {
            data: image.as_raw(),
            width,
            height,
            stride: width * 4,
        };
        let blocks = match self.format {
            DdsFormat::BC1 => bc1::compress_blocks(&surface),
            DdsFormat::BC3 => bc3::compress_blocks(&surface),
        };

        let expected = self.format.data_size(width, height);
        if blocks.len() != expected {
            return Err(DdsError::CompressionFailed(format!(
                "expected {} bytes of block data, got {}",
                expected,
                blocks.len()
            )));
        }

        let mut data = Vec::with_capacity(HEADER_SIZE + blocks.len());
        data.extend_from_slice(&DdsHeader::new(width, height, self.format).to_bytes());
        data.extend_from_slice(&blocks);
        Ok(data)
    }

    /// Total file size produced for the given dimensions.
    pub fn expected_size(&self, width: u32, height: u32) -> usize {
        HEADER_SIZE + self.format.data_size(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small_image() {
        let encoder = DdsEncoder::new(DdsFormat::BC1);
        let data = encoder.encode(&RgbaImage::new(4, 4)).unwrap();
        assert_eq!(data.len(), 136);
        assert_eq!(&data[0..4], b"DDS ");
    }

    #[test]
    fn test_encode_matches_expected_size() {
        let encoder = DdsEncoder::new(DdsFormat::BC3);
        let data = encoder.encode(&RgbaImage::new(64, 64)).unwrap();
        assert_eq!(data.len(), encoder.expected_size(64, 64));
    }

    #[test]
    fn test_encode_avatar_sizes() {
        let encoder = DdsEncoder::new(DdsFormat::BC3);
        for size in [440u32, 260, 128, 64] {
            let data = encoder.encode(&RgbaImage::new(size, size)).unwrap();
            assert_eq!(data.len(), encoder.expected_size(size, size));
        }
    }

    #[test]
    fn test_encode_zero_dimensions() {
        let encoder = DdsEncoder::new(DdsFormat::BC1);
        let result = encoder.encode(&RgbaImage::new(0, 0));
        assert_eq!(result, Err(DdsError::InvalidDimensions(0, 0)));
    }

    #[test]
    fn test_encode_unaligned_dimensions() {
        let encoder = DdsEncoder::new(DdsFormat::BC3);
        let result = encoder.encode(&RgbaImage::new(10, 8));
        assert_eq!(result, Err(DdsError::InvalidDimensions(10, 8)));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let image = RgbaImage::from_fn(64, 64, |x, y| {
            image::Rgba([(x * 4) as u8, (y * 4) as u8, 128, 255])
        });
        let encoder = DdsEncoder::new(DdsFormat::BC3);
        assert_eq!(encoder.encode(&image), encoder.encode(&image));
    }
}
