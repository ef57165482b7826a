//! Upload command - transfer an existing archive.

use std::path::PathBuf;

use avatarpak::config::ConfigFile;
use avatarpak::transfer;
use clap::Args;

use crate::commands::common::FtpArgs;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Archive to upload
    pub archive: PathBuf,

    #[command(flatten)]
    pub ftp: FtpArgs,
}

/// Run the upload command.
pub fn run(args: UploadArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let endpoint = args.ftp.require(&config)?;

    transfer::upload(&endpoint, &args.archive)?;
    println!(
        "Uploaded {} to {}{}",
        args.archive.display(),
        endpoint.address(),
        endpoint.remote_dir
    );
    Ok(())
}
