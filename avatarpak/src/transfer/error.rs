//! Error types for archive transfer.

use std::io;
use std::path::PathBuf;

use suppaftp::FtpError;
use thiserror::Error;

/// Errors that can occur while uploading an archive. Each variant wraps the
/// underlying network or protocol failure.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The archive path has no usable base name.
    #[error("archive path has no file name: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The control connection could not be established.
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: FtpError,
    },

    /// The server rejected the login.
    #[error("login rejected by {address}: {source}")]
    Login {
        address: String,
        #[source]
        source: FtpError,
    },

    /// Binary transfer mode could not be negotiated.
    #[error("failed to enter binary mode on {address}: {source}")]
    BinaryMode {
        address: String,
        #[source]
        source: FtpError,
    },

    /// The remote directory is missing or inaccessible.
    #[error("failed to change to remote directory {dir}: {source}")]
    RemoteDir {
        dir: String,
        #[source]
        source: FtpError,
    },

    /// The local archive could not be opened for reading.
    #[error("failed to open {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The server rejected the file store.
    #[error("failed to store {name} on {address}: {source}")]
    Store {
        name: String,
        address: String,
        #[source]
        source: FtpError,
    },
}
