//! Error types for archive writing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Errors that can occur while writing an archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The destination path has no file name component.
    #[error("invalid archive destination: {}", .0.display())]
    InvalidDestination(PathBuf),

    /// An input path has no usable base name.
    #[error("archive input has no file name: {}", .0.display())]
    InvalidInput(PathBuf),

    /// An input file could not be read.
    #[error("failed to read archive input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The archive file could not be written.
    #[error("failed to write archive {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The ZIP container itself reported a failure.
    #[error("archive container error for {}: {source}", path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}
