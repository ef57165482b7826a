//! CLI error type.

use std::io;
use std::path::PathBuf;

use avatarpak::config::ConfigError;
use avatarpak::package::PackageError;
use avatarpak::transfer::TransferError;
use thiserror::Error;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid or missing command-line input.
    #[error("{0}")]
    Usage(String),

    /// Filesystem access outside the core pipeline failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file handling failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Packaging failed.
    #[error(transparent)]
    Package(#[from] PackageError),

    /// Archive upload failed.
    #[error(transparent)]
    Transfer(#[from] TransferError),
}
