//! Pack command - package a single image.

use std::path::PathBuf;

use avatarpak::config::ConfigFile;
use avatarpak::package::{self, naming, PackageRequest};
use avatarpak::transfer;
use clap::Args;

use crate::commands::common::{resolve_classification, ClassificationArg, FtpArgs};
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct PackArgs {
    /// Source image (PNG or JPEG)
    pub image: PathBuf,

    /// Destination archive path (defaults to <image stem>.xavatar next to
    /// the image)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Account classification
    #[arg(long, value_enum)]
    pub classification: Option<ClassificationArg>,

    /// Upload the produced archive via FTP
    #[arg(long)]
    pub upload: bool,

    #[command(flatten)]
    pub ftp: FtpArgs,
}

/// Run the pack command.
pub fn run(args: PackArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let classification = resolve_classification(args.classification, &config);
    let output = match args.output {
        Some(path) => path,
        None => default_output(&args.image)?,
    };

    let request = PackageRequest::new(&args.image, classification, &output);
    package::build(&request)?;
    println!("Packaged {} -> {}", args.image.display(), output.display());

    if args.upload {
        let endpoint = args.ftp.require(&config)?;
        transfer::upload(&endpoint, &output)?;
        println!("Uploaded {} to {}", output.display(), endpoint.address());
    }
    Ok(())
}

fn default_output(image: &PathBuf) -> Result<PathBuf, CliError> {
    let stem = image
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CliError::Usage(format!("invalid image path: {}", image.display())))?;
    Ok(image.with_file_name(naming::archive_filename(stem)))
}
