//! Error types for configuration handling.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or parsed.
    #[error("failed to load config {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    /// The configuration file could not be written.
    #[error("failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
