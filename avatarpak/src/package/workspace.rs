//! Scratch workspace lifecycle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while creating a scratch workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The workspace directory could not be created, e.g. a file already
    /// occupies the path or permission was denied.
    #[error("failed to create scratch workspace {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An exclusively-owned, ephemeral directory for one package build.
///
/// The directory and its contents are removed when the workspace is dropped,
/// on success and failure alike. Removal failures are logged and suppressed
/// so they never mask the error that unwound the build.
#[derive(Debug)]
pub struct ScratchWorkspace {
    root: PathBuf,
}

impl ScratchWorkspace {
    /// Create the workspace directory, including missing parents.
    pub fn create(path: &Path) -> Result<Self, WorkspaceError> {
        fs::create_dir_all(path).map_err(|source| WorkspaceError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "created scratch workspace");
        Ok(Self {
            root: path.to_path_buf(),
        })
    }

    /// Path of the workspace directory.
    pub fn path(&self) -> &Path {
        &self.root
    }
}

impl Drop for ScratchWorkspace {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.root) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(
                    path = %self.root.display(),
                    error = %err,
                    "failed to remove scratch workspace"
                );
            }
        }
    }
}
