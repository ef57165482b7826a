//! Init command - create the configuration file.

use avatarpak::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
pub fn run() -> Result<(), CliError> {
    let path = config_file_path();
    let config = ConfigFile::load().unwrap_or_default();
    config.save()?;

    println!("Configuration file: {}", path.display());
    println!();
    println!("Edit this file to set a default FTP endpoint, batch directories");
    println!("and classification. CLI arguments override config file values");
    println!("when specified.");
    Ok(())
}
