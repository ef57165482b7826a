//! Batch orchestration over a set of source images.
//!
//! Images are processed strictly sequentially, in the caller's order. A
//! packaging failure aborts the whole batch immediately; archives produced
//! before the failure remain on disk. A transfer failure, by contrast, is
//! logged and tolerated: the archive still counts as produced, the batch
//! moves on, and only the transferred count reflects the loss. Tests pin
//! down both sides of this asymmetry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::package::{self, naming, PackageError, PackageRequest, UserClassification};
use crate::transfer::{self, TransferEndpoint};

/// Aggregate result of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Number of source images in the batch.
    pub total: usize,
    /// Number of archives successfully uploaded.
    pub transferred: usize,
    /// Produced archive paths, in input order.
    pub output_files: Vec<PathBuf>,
}

/// Convert every image into an archive inside `output_dir`, optionally
/// uploading each produced archive to `endpoint`.
///
/// Archive and scratch paths derive from each image's file stem
/// (`<stem>.xavatar`, `<stem>_tmp`). Returns the aggregate outcome, or the
/// first packaging error.
pub fn run_batch(
    images: &[PathBuf],
    classification: UserClassification,
    output_dir: &Path,
    endpoint: Option<&TransferEndpoint>,
) -> Result<BatchOutcome, PackageError> {
    let mut outcome = BatchOutcome {
        total: images.len(),
        ..BatchOutcome::default()
    };

    for image in images {
        let stem = image
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| PackageError::InvalidSource(image.clone()))?;
        let output_path = output_dir.join(naming::archive_filename(&stem));
        let scratch_dir = output_dir.join(naming::scratch_dirname(&stem));

        let request = PackageRequest::new(image.clone(), classification, output_path.clone());
        package::build_in(&request, &scratch_dir)?;
        outcome.output_files.push(output_path.clone());

        if let Some(endpoint) = endpoint {
            match transfer::upload(endpoint, &output_path) {
                Ok(()) => outcome.transferred += 1,
                Err(err) => {
                    // Tolerated: the archive was produced, only the upload
                    // is lost. The batch keeps going.
                    warn!(
                        archive = %output_path.display(),
                        error = %err,
                        "transfer failed, continuing batch"
                    );
                }
            }
        }
    }

    info!(
        total = outcome.total,
        transferred = outcome.transferred,
        "batch complete"
    );
    Ok(outcome)
}

/// Whether a path looks like a supported source image (`.png`, `.jpg`,
/// `.jpeg`, case-insensitive).
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "png" || ext == "jpg" || ext == "jpeg"
        })
        .unwrap_or(false)
}

/// Collect the supported source images directly inside `dir`, sorted by
/// file name so batch input order is deterministic.
pub fn collect_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use tempfile::TempDir;

    use super::*;

    fn write_test_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let image = RgbaImage::from_fn(16, 16, |x, y| {
            image::Rgba([(x * 16) as u8, (y * 16) as u8, 99, 255])
        });
        image.save(&path).unwrap();
        path
    }

    #[test]
    fn test_run_batch_without_endpoint() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        let output = temp.path().join("out");
        fs::create_dir_all(&input).unwrap();
        fs::create_dir_all(&output).unwrap();

        let images = vec![
            write_test_png(&input, "a.png"),
            write_test_png(&input, "b.png"),
            write_test_png(&input, "c.png"),
        ];

        let outcome = run_batch(&images, UserClassification::Standard, &output, None).unwrap();

        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.transferred, 0);
        assert_eq!(
            outcome.output_files,
            vec![
                output.join("a.xavatar"),
                output.join("b.xavatar"),
                output.join("c.xavatar"),
            ]
        );
        for path in &outcome.output_files {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_run_batch_tolerates_transfer_failures() {
        let temp = TempDir::new().unwrap();
        let images = vec![
            write_test_png(temp.path(), "a.png"),
            write_test_png(temp.path(), "b.png"),
        ];
        // Unreachable endpoint: every upload fails, the batch must not.
        let endpoint = TransferEndpoint::new("127.0.0.1").with_port(1);

        let outcome = run_batch(
            &images,
            UserClassification::Standard,
            temp.path(),
            Some(&endpoint),
        )
        .unwrap();

        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.transferred, 0);
        assert_eq!(outcome.output_files.len(), 2);
        for path in &outcome.output_files {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_run_batch_aborts_on_packaging_failure() {
        let temp = TempDir::new().unwrap();
        let good = write_test_png(temp.path(), "a.png");
        let bad = temp.path().join("b.png");
        fs::write(&bad, b"not an image").unwrap();
        let never_reached = write_test_png(temp.path(), "c.png");

        let result = run_batch(
            &[good, bad, never_reached],
            UserClassification::Standard,
            temp.path(),
            None,
        );

        // A bad image aborts the whole batch; earlier archives remain,
        // later images are never processed.
        assert!(matches!(result, Err(PackageError::Encoding(_))));
        assert!(temp.path().join("a.xavatar").exists());
        assert!(!temp.path().join("b.xavatar").exists());
        assert!(!temp.path().join("c.xavatar").exists());
        assert!(!temp.path().join("b_tmp").exists());
    }

    #[test]
    fn test_run_batch_empty_input() {
        let temp = TempDir::new().unwrap();
        let outcome = run_batch(&[], UserClassification::Standard, temp.path(), None).unwrap();
        assert_eq!(outcome, BatchOutcome::default());
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a.png")));
        assert!(is_image_file(Path::new("a.JPG")));
        assert!(is_image_file(Path::new("a.jpeg")));
        assert!(!is_image_file(Path::new("a.gif")));
        assert!(!is_image_file(Path::new("archive.xavatar")));
        assert!(!is_image_file(Path::new("noext")));
    }

    #[test]
    fn test_collect_images_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        write_test_png(temp.path(), "zeta.png");
        // Collection filters on extension only; content is not decoded here.
        fs::write(temp.path().join("alpha.jpg"), b"jpeg bytes").unwrap();
        fs::write(temp.path().join("notes.txt"), b"skip me").unwrap();
        fs::create_dir(temp.path().join("subdir.png")).unwrap();

        let images = collect_images(temp.path()).unwrap();

        assert_eq!(
            images,
            vec![temp.path().join("alpha.jpg"), temp.path().join("zeta.png")]
        );
    }
}
