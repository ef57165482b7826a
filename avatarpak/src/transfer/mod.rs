//! FTP upload of produced archives.
//!
//! The console-side homebrew tool exposes a plain FTP server (conventionally
//! on port 2121). Uploads are blocking and single-attempt: one control
//! connection, optional credentials (anonymous otherwise), a directory
//! change, then a binary store of the archive under its base name. Every
//! protocol or network failure surfaces as a [`TransferError`] with the
//! underlying cause preserved; retry policy is the caller's business.

mod endpoint;
mod error;

pub use endpoint::{TransferEndpoint, DEFAULT_FTP_PORT};
pub use error::TransferError;

use std::fs::File;
use std::path::Path;

use suppaftp::types::FileType;
use suppaftp::FtpStream;
use tracing::info;

/// Upload `file` to the endpoint's remote directory under its base name.
pub fn upload(endpoint: &TransferEndpoint, file: &Path) -> Result<(), TransferError> {
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TransferError::InvalidPath(file.to_path_buf()))?;
    let address = endpoint.address();

    let mut ftp = FtpStream::connect(&address).map_err(|source| TransferError::Connect {
        address: address.clone(),
        source,
    })?;

    let login = match (&endpoint.username, &endpoint.password) {
        (Some(user), Some(pass)) => ftp.login(user, pass),
        _ => ftp.login("anonymous", "anonymous"),
    };
    login.map_err(|source| TransferError::Login {
        address: address.clone(),
        source,
    })?;

    ftp.transfer_type(FileType::Binary)
        .map_err(|source| TransferError::BinaryMode {
            address: address.clone(),
            source,
        })?;
    ftp.cwd(&endpoint.remote_dir)
        .map_err(|source| TransferError::RemoteDir {
            dir: endpoint.remote_dir.clone(),
            source,
        })?;

    let mut reader = File::open(file).map_err(|source| TransferError::OpenFile {
        path: file.to_path_buf(),
        source,
    })?;
    ftp.put_file(name, &mut reader)
        .map_err(|source| TransferError::Store {
            name: name.to_string(),
            address: address.clone(),
            source,
        })?;

    // Best-effort close; the payload is already stored.
    let _ = ftp.quit();

    info!(
        file = %file.display(),
        address = %address,
        remote_dir = %endpoint.remote_dir,
        "uploaded archive"
    );
    Ok(())
}
