//! The package builder: one image in, one archive out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::archive::{self, ArchiveError};
use crate::profile::{OnlineProfile, ProfileError};
use crate::texture::{self, EncodingError, TEXTURE_SIZES};

use super::{naming, PackageRequest, ScratchWorkspace, UserClassification, WorkspaceError};

/// Errors that can occur while building a package. Each variant preserves
/// the underlying cause of the failed stage.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The source image path has no usable file stem.
    #[error("source image path has no file name: {}", .0.display())]
    InvalidSource(PathBuf),

    /// The scratch workspace could not be created.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// The source raster could not be staged into the workspace.
    #[error("failed to stage source image {}: {source}", path.display())]
    StageSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A texture could not be encoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The profile metadata document could not be written.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// The final archive could not be written.
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Build one avatar package.
///
/// The scratch workspace is derived from the source image's stem next to the
/// destination archive (`<stem>_tmp`); see [`build_in`] for callers that
/// dictate the workspace location themselves.
pub fn build(request: &PackageRequest) -> Result<(), PackageError> {
    let stem = source_stem(request)?;
    let parent = request
        .output_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    build_in(request, &parent.join(naming::scratch_dirname(&stem)))
}

/// Build one avatar package using an explicit scratch workspace path.
///
/// The workspace is created at `scratch_dir` and removed unconditionally
/// when the build finishes, whether it succeeded or failed. Failures from
/// any stage propagate to the caller after cleanup has run.
pub fn build_in(request: &PackageRequest, scratch_dir: &Path) -> Result<(), PackageError> {
    let workspace = ScratchWorkspace::create(scratch_dir)?;
    // The workspace guard must outlive assembly so cleanup runs on the
    // error path too; assembly itself never removes files.
    let result = assemble(request, workspace.path());
    drop(workspace);
    result
}

fn assemble(request: &PackageRequest, dir: &Path) -> Result<(), PackageError> {
    let base = dir.join(naming::BASE_RASTER);
    fs::copy(&request.image_path, &base).map_err(|source| PackageError::StageSource {
        path: request.image_path.clone(),
        source,
    })?;

    // Entry order is fixed: raster base, textures descending, metadata last.
    let mut entries = vec![base.clone()];
    for size in TEXTURE_SIZES {
        let asset = texture::encode_avatar(&base, dir, size)?;
        entries.push(asset.texture_path);
    }

    if request.classification == UserClassification::ActivatedOffline {
        let document = dir.join(naming::METADATA_DOCUMENT);
        OnlineProfile::synthesize().write_to(&document)?;
        entries.push(document);
    }

    archive::write_archive(&entries, &request.output_path)?;
    info!(
        image = %request.image_path.display(),
        archive = %request.output_path.display(),
        "built avatar package"
    );
    Ok(())
}

fn source_stem(request: &PackageRequest) -> Result<String, PackageError> {
    request
        .image_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| PackageError::InvalidSource(request.image_path.clone()))
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use image::RgbaImage;
    use tempfile::TempDir;
    use zip::ZipArchive;

    use super::*;

    fn write_test_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let image = RgbaImage::from_fn(32, 24, |x, y| {
            image::Rgba([(x * 8) as u8, (y * 10) as u8, 200, 255])
        });
        image.save(&path).unwrap();
        path
    }

    fn entry_names(path: &Path) -> Vec<String> {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_build_standard_produces_five_entries() {
        let temp = TempDir::new().unwrap();
        let image = write_test_png(temp.path(), "portrait.png");
        let output = temp.path().join("portrait.xavatar");
        let request = PackageRequest::new(&image, UserClassification::Standard, &output);

        build(&request).unwrap();

        assert_eq!(
            entry_names(&output),
            vec![
                "avatar.png",
                "avatar440.dds",
                "avatar260.dds",
                "avatar128.dds",
                "avatar64.dds",
            ]
        );
    }

    #[test]
    fn test_build_activated_offline_appends_metadata_last() {
        let temp = TempDir::new().unwrap();
        let image = write_test_png(temp.path(), "portrait.png");
        let output = temp.path().join("portrait.xavatar");
        let request = PackageRequest::new(&image, UserClassification::ActivatedOffline, &output);

        build(&request).unwrap();

        let names = entry_names(&output);
        assert_eq!(names.len(), 6);
        assert_eq!(names.last().unwrap(), "online.json");
    }

    #[test]
    fn test_build_textures_have_expected_dimensions() {
        let temp = TempDir::new().unwrap();
        let image = write_test_png(temp.path(), "portrait.png");
        let output = temp.path().join("portrait.xavatar");
        let request = PackageRequest::new(&image, UserClassification::Standard, &output);

        build(&request).unwrap();

        let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
        for (index, expected) in TEXTURE_SIZES.iter().enumerate() {
            let mut entry = archive.by_index(index + 1).unwrap();
            let mut bytes = Vec::new();
            io::Read::read_to_end(&mut entry, &mut bytes).unwrap();
            assert_eq!(&bytes[0..4], b"DDS ");
            assert_eq!(read_u32(&bytes, 12), *expected);
            assert_eq!(read_u32(&bytes, 16), *expected);
        }
    }

    #[test]
    fn test_build_removes_scratch_workspace() {
        let temp = TempDir::new().unwrap();
        let image = write_test_png(temp.path(), "portrait.png");
        let output = temp.path().join("portrait.xavatar");
        let request = PackageRequest::new(&image, UserClassification::Standard, &output);

        build(&request).unwrap();

        assert!(!temp.path().join("portrait_tmp").exists());
    }

    #[test]
    fn test_build_is_repeatable() {
        let temp = TempDir::new().unwrap();
        let image = write_test_png(temp.path(), "portrait.png");
        let output = temp.path().join("portrait.xavatar");
        let request = PackageRequest::new(&image, UserClassification::ActivatedOffline, &output);

        build(&request).unwrap();
        let first = entry_names(&output);
        build(&request).unwrap();
        let second = entry_names(&output);

        assert_eq!(first, second);
        assert!(!temp.path().join("portrait_tmp").exists());
    }

    #[test]
    fn test_build_corrupt_source_fails_cleanly() {
        let temp = TempDir::new().unwrap();
        let image = temp.path().join("broken.png");
        fs::write(&image, b"definitely not image data").unwrap();
        let output = temp.path().join("broken.xavatar");
        let request = PackageRequest::new(&image, UserClassification::Standard, &output);

        let result = build(&request);

        assert!(matches!(result, Err(PackageError::Encoding(_))));
        assert!(!output.exists(), "no archive may exist after a failed build");
        assert!(!temp.path().join("broken_tmp").exists());
    }

    #[test]
    fn test_build_missing_source_fails_cleanly() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("ghost.xavatar");
        let request = PackageRequest::new(
            temp.path().join("ghost.png"),
            UserClassification::Standard,
            &output,
        );

        let result = build(&request);

        assert!(matches!(result, Err(PackageError::StageSource { .. })));
        assert!(!output.exists());
        assert!(!temp.path().join("ghost_tmp").exists());
    }

    #[test]
    fn test_build_in_uses_explicit_scratch_dir() {
        let temp = TempDir::new().unwrap();
        let image = write_test_png(temp.path(), "portrait.png");
        let output = temp.path().join("portrait.xavatar");
        let scratch = temp.path().join("elsewhere_tmp");
        let request = PackageRequest::new(&image, UserClassification::Standard, &output);

        build_in(&request, &scratch).unwrap();

        assert!(output.exists());
        assert!(!scratch.exists());
    }
}
