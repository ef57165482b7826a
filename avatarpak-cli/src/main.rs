//! Avatarpak CLI - command-line interface
//!
//! This binary is a thin shim over the avatarpak library: argument parsing,
//! config-file merging and progress output live here; all packaging logic
//! lives in the library.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "avatarpak",
    version,
    about = "Package portrait images into console avatar bundles"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Package a single image into an .xavatar archive
    Pack(commands::pack::PackArgs),
    /// Package every image in a directory, optionally uploading each archive
    Batch(commands::batch::BatchArgs),
    /// Upload an existing archive to the console's FTP server
    Upload(commands::upload::UploadArgs),
    /// Create the configuration file
    Init,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Pack(args) => commands::pack::run(args),
        Command::Batch(args) => commands::batch::run(args),
        Command::Upload(args) => commands::upload::run(args),
        Command::Init => commands::init::run(),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
