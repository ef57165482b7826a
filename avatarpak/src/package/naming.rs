//! Centralized package naming conventions.
//!
//! This module is the single source of truth for every file name a package
//! touches: the staged raster base, per-size texture and preview names, the
//! metadata document, the archive extension and the scratch directory
//! suffix. All other modules use these functions rather than constructing
//! names directly.

/// Base name the source raster is staged under inside the workspace.
pub const BASE_RASTER: &str = "avatar.png";

/// File name of the synthesized profile metadata document.
pub const METADATA_DOCUMENT: &str = "online.json";

/// Extension of the final archive, without the leading dot.
pub const ARCHIVE_EXTENSION: &str = "xavatar";

/// Archive file name for a source image stem.
///
/// # Examples
///
/// ```
/// use avatarpak::package::naming::archive_filename;
///
/// assert_eq!(archive_filename("portrait"), "portrait.xavatar");
/// ```
pub fn archive_filename(stem: &str) -> String {
    format!("{}.{}", stem, ARCHIVE_EXTENSION)
}

/// Scratch workspace directory name for a source image stem.
///
/// # Examples
///
/// ```
/// use avatarpak::package::naming::scratch_dirname;
///
/// assert_eq!(scratch_dirname("portrait"), "portrait_tmp");
/// ```
pub fn scratch_dirname(stem: &str) -> String {
    format!("{}_tmp", stem)
}

/// Texture file name for a square size.
pub fn texture_filename(size: u32) -> String {
    format!("avatar{}.dds", size)
}

/// Preview file name for a square size.
pub fn preview_filename(size: u32) -> String {
    format!("avatar{}.png", size)
}
