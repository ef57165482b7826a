//! File-level avatar texture encoding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{ImageError, ImageReader, RgbaImage};
use thiserror::Error;
use tracing::debug;

use crate::dds::DdsFormat;
use crate::package::naming;

use super::{DdsTextureEncoder, TextureEncoder, TextureError};

/// A texture produced by [`encode_avatar`], paired with its raster preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    /// Path of the block-compressed texture file.
    pub texture_path: PathBuf,
    /// Path of the PNG preview at the same resolution.
    pub preview_path: PathBuf,
    /// Square edge length in pixels.
    pub size: u32,
}

/// Errors that can occur while producing an [`EncodedAsset`].
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The source raster could not be read or decoded.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// The texture encoder rejected the pixel buffer.
    #[error("failed to compress texture for {}: {source}", path.display())]
    Compress {
        path: PathBuf,
        #[source]
        source: TextureError,
    },

    /// The texture file could not be written.
    #[error("failed to write texture {}: {source}", path.display())]
    WriteTexture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The preview file could not be written.
    #[error("failed to write preview {}: {source}", path.display())]
    WritePreview {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Encode one avatar texture at the given square size.
///
/// Decodes `source`, stretch-resizes it to exactly `size`×`size` (aspect
/// ratio is intentionally not preserved), then writes two files into `dir`:
/// the BC3-compressed texture and a PNG preview of the same pixels. Either
/// both files are written or the call fails; callers must not assume any
/// output exists after an error.
pub fn encode_avatar(source: &Path, dir: &Path, size: u32) -> Result<EncodedAsset, EncodingError> {
    let rgba = load_rgba(source)?;
    let resized = image::imageops::resize(&rgba, size, size, FilterType::CatmullRom);

    let encoder = DdsTextureEncoder::new(DdsFormat::BC3);
    let texture = encoder.encode(&resized).map_err(|e| EncodingError::Compress {
        path: source.to_path_buf(),
        source: e,
    })?;

    let texture_path = dir.join(naming::texture_filename(size));
    let preview_path = dir.join(naming::preview_filename(size));

    fs::write(&texture_path, &texture).map_err(|source| EncodingError::WriteTexture {
        path: texture_path.clone(),
        source,
    })?;
    resized
        .save(&preview_path)
        .map_err(|source| EncodingError::WritePreview {
            path: preview_path.clone(),
            source,
        })?;

    debug!(
        source = %source.display(),
        texture = %texture_path.display(),
        size,
        encoder = encoder.name(),
        "encoded avatar texture"
    );

    Ok(EncodedAsset {
        texture_path,
        preview_path,
        size,
    })
}

/// Decode a raster by content, not extension.
///
/// Staged copies keep the `avatar.png` base name regardless of the source
/// format, so format detection must sniff the bytes.
fn load_rgba(source: &Path) -> Result<RgbaImage, EncodingError> {
    let decode_err = |source_err: ImageError| EncodingError::Decode {
        path: source.to_path_buf(),
        source: source_err,
    };
    let image = ImageReader::open(source)
        .map_err(|e| decode_err(e.into()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.into()))?
        .decode()
        .map_err(decode_err)?;
    Ok(image.to_rgba8())
}
