//! Error types for profile document output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the profile document.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The document could not be serialized.
    #[error("failed to serialize profile document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The document file could not be written.
    #[error("failed to write profile document {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
