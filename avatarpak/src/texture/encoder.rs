//! Texture encoder trait.

use image::RgbaImage;

use super::TextureError;

/// Interface for encoding RGBA pixel data into a texture file format.
///
/// Implementations must be `Send + Sync` so encoders can be shared freely.
pub trait TextureEncoder: Send + Sync {
    /// Encode an image into the complete on-disk texture representation.
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, TextureError>;

    /// File extension for this format, without the leading dot.
    fn extension(&self) -> &str;

    /// Human-readable encoder name for diagnostics.
    fn name(&self) -> &str;
}
