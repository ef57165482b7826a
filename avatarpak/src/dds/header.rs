//! DDS file header construction.

use super::DdsFormat;

/// Total size of the serialized header, including the magic bytes.
pub const HEADER_SIZE: usize = 128;

// DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | DDSD_LINEARSIZE
const HEADER_FLAGS: u32 = 0x1 | 0x2 | 0x4 | 0x1000 | 0x0008_0000;
// DDPF_FOURCC
const PIXELFORMAT_FLAGS: u32 = 0x4;
// DDSCAPS_TEXTURE
const CAPS_TEXTURE: u32 = 0x1000;

/// Legacy DX9-style DDS header for a single-level compressed texture.
///
/// The serialized form is the 4-byte `DDS ` magic followed by the 124-byte
/// `DDS_HEADER` structure with a FourCC pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    width: u32,
    height: u32,
    format: DdsFormat,
}

impl DdsHeader {
    /// Create a header for a texture of the given dimensions and format.
    pub fn new(width: u32, height: u32, format: DdsFormat) -> Self {
        Self {
            width,
            height,
            format,
        }
    }

    /// Serialize the header to its 128-byte on-disk representation.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        let linear_size = self.format.data_size(self.width, self.height) as u32;

        bytes[0..4].copy_from_slice(b"DDS ");
        write_u32(&mut bytes, 4, 124); // dwSize
        write_u32(&mut bytes, 8, HEADER_FLAGS);
        write_u32(&mut bytes, 12, self.height);
        write_u32(&mut bytes, 16, self.width);
        write_u32(&mut bytes, 20, linear_size); // dwPitchOrLinearSize
        // dwDepth, dwMipMapCount and dwReserved1[11] stay zero.

        // DDS_PIXELFORMAT at offset 76.
        write_u32(&mut bytes, 76, 32); // dwSize
        write_u32(&mut bytes, 80, PIXELFORMAT_FLAGS);
        bytes[84..88].copy_from_slice(&self.format.fourcc());

        write_u32(&mut bytes, 108, CAPS_TEXTURE); // dwCaps
        bytes
    }
}

fn write_u32(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
