//! Texture encoding for avatar packages.
//!
//! This module turns one source raster into the fixed-size texture assets a
//! package carries. The [`TextureEncoder`] trait is the seam between pixel
//! data and the on-disk texture format, so the packaging pipeline never
//! depends on a concrete container:
//!
//! ```text
//! ┌─────────────────────┐
//! │   Package Builder   │
//! │                     │
//! │  encode_avatar(...) │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │   TextureEncoder    │ (trait)
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  DdsTextureEncoder  │ (BC1/BC3 via the dds module)
//! └─────────────────────┘
//! ```
//!
//! [`encode_avatar`] is the file-level operation: decode, stretch-resize to
//! an exact square, then write both the compressed texture and a plain PNG
//! preview sharing the same base name.

mod asset;
mod dds;
mod encoder;
mod error;

pub use asset::{encode_avatar, EncodedAsset, EncodingError};
pub use dds::DdsTextureEncoder;
pub use encoder::TextureEncoder;
pub use error::TextureError;

/// Square texture resolutions required by the console tool, in the order
/// they enter the archive (descending).
pub const TEXTURE_SIZES: [u32; 4] = [440, 260, 128, 64];
