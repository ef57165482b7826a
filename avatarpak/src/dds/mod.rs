//! DDS container encoding.
//!
//! This module produces DirectDraw Surface files from RGBA images: a 128-byte
//! header (magic + legacy DX9 header) followed by a single level of BC1 or
//! BC3 block-compressed data. Avatars are small, fixed-size textures, so no
//! mipmap chains are generated.
//!
//! # Example
//!
//! ```
//! use avatarpak::dds::{DdsEncoder, DdsFormat};
//! use image::RgbaImage;
//!
//! let encoder = DdsEncoder::new(DdsFormat::BC3);
//! let image = RgbaImage::new(64, 64);
//! let data = encoder.encode(&image).unwrap();
//!
//! assert_eq!(&data[0..4], b"DDS ");
//! ```

mod encoder;
mod error;
mod header;

pub use encoder::DdsEncoder;
pub use error::DdsError;
pub use header::DdsHeader;

/// Block compression format for DDS output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdsFormat {
    /// BC1/DXT1 compression (8 bytes per 4×4 block, 1-bit alpha).
    BC1,
    /// BC3/DXT5 compression (16 bytes per 4×4 block, full alpha).
    BC3,
}

impl DdsFormat {
    /// Bytes per 4×4 block for this format.
    pub fn block_size(&self) -> usize {
        match self {
            DdsFormat::BC1 => 8,
            DdsFormat::BC3 => 16,
        }
    }

    /// FourCC code written into the DDS pixel format.
    pub fn fourcc(&self) -> [u8; 4] {
        match self {
            DdsFormat::BC1 => *b"DXT1",
            DdsFormat::BC3 => *b"DXT5",
        }
    }

    /// Compressed data size for a single level of the given dimensions.
    pub fn data_size(&self, width: u32, height: u32) -> usize {
        let blocks_wide = width.div_ceil(4) as usize;
        let blocks_high = height.div_ceil(4) as usize;
        blocks_wide * blocks_high * self.block_size()
    }
}
