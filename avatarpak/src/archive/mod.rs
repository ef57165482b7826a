//! Flat ZIP archiving of produced package files.
//!
//! The final deliverable is a single deflate ZIP whose entries are stored
//! under their base names in exactly the order the caller supplies. The
//! archive is written to a `.part` staging file and renamed into place, so a
//! failed write never leaves a truncated-but-plausible archive at the
//! destination.

mod error;

pub use error::{ArchiveError, ArchiveResult};

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Bundle `files` into a single archive at `dest`.
///
/// Each input is stored under its base name; directory structure is not
/// preserved. Entry order follows input order exactly. On any failure the
/// staging file is removed and `dest` is left untouched.
pub fn write_archive(files: &[PathBuf], dest: &Path) -> ArchiveResult<()> {
    let file_name = dest
        .file_name()
        .ok_or_else(|| ArchiveError::InvalidDestination(dest.to_path_buf()))?;
    let mut staging_name = file_name.to_os_string();
    staging_name.push(".part");
    let staging = dest.with_file_name(staging_name);

    match write_entries(files, &staging) {
        Ok(()) => {
            fs::rename(&staging, dest).map_err(|source| {
                let _ = fs::remove_file(&staging);
                ArchiveError::Write {
                    path: dest.to_path_buf(),
                    source,
                }
            })?;
            info!(archive = %dest.display(), entries = files.len(), "wrote archive");
            Ok(())
        }
        Err(err) => {
            let _ = fs::remove_file(&staging);
            Err(err)
        }
    }
}

fn write_entries(files: &[PathBuf], staging: &Path) -> ArchiveResult<()> {
    let out = File::create(staging).map_err(|source| ArchiveError::Write {
        path: staging.to_path_buf(),
        source,
    })?;
    let mut writer = ZipWriter::new(out);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ArchiveError::InvalidInput(path.clone()))?;
        let mut input = File::open(path).map_err(|source| ArchiveError::ReadInput {
            path: path.clone(),
            source,
        })?;

        writer
            .start_file(name, options)
            .map_err(|source| ArchiveError::Zip {
                path: staging.to_path_buf(),
                source,
            })?;
        io::copy(&mut input, &mut writer).map_err(|source| ArchiveError::Write {
            path: staging.to_path_buf(),
            source,
        })?;
    }

    writer.finish().map_err(|source| ArchiveError::Zip {
        path: staging.to_path_buf(),
        source,
    })?;
    Ok(())
}
