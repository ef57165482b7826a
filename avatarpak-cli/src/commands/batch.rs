//! Batch command - package a directory of images.

use std::path::PathBuf;
use std::time::Duration;

use avatarpak::batch;
use avatarpak::config::ConfigFile;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::commands::common::{resolve_classification, ClassificationArg, FtpArgs};
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Directory containing the source images
    pub input_dir: PathBuf,

    /// Directory to write archives into (defaults to the input directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Account classification
    #[arg(long, value_enum)]
    pub classification: Option<ClassificationArg>,

    /// Upload each produced archive via FTP
    #[arg(long)]
    pub upload: bool,

    #[command(flatten)]
    pub ftp: FtpArgs,
}

/// Run the batch command.
pub fn run(args: BatchArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let classification = resolve_classification(args.classification, &config);
    let output_dir = args.output.unwrap_or_else(|| args.input_dir.clone());

    let images = batch::collect_images(&args.input_dir).map_err(|source| CliError::Io {
        path: args.input_dir.clone(),
        source,
    })?;
    if images.is_empty() {
        return Err(CliError::Usage(format!(
            "no PNG or JPEG images found in {}",
            args.input_dir.display()
        )));
    }

    let endpoint = if args.upload {
        Some(args.ftp.require(&config)?)
    } else {
        None
    };

    let spinner = ProgressBar::new_spinner().with_message(format!(
        "packaging {} images into {}",
        images.len(),
        output_dir.display()
    ));
    let spinner_style = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(spinner_style);
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = batch::run_batch(&images, classification, &output_dir, endpoint.as_ref());
    spinner.finish_and_clear();
    let outcome = outcome?;

    println!("{}", style("Batch complete").green().bold());
    println!("  Total avatars:   {}", outcome.total);
    if endpoint.is_some() {
        println!("  Transferred:     {}", outcome.transferred);
    }
    for path in &outcome.output_files {
        println!("  {}", path.display());
    }
    Ok(())
}
