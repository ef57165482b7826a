//! Common types and utilities shared across CLI commands.

use avatarpak::config::ConfigFile;
use avatarpak::package::UserClassification;
use avatarpak::transfer::{TransferEndpoint, DEFAULT_FTP_PORT};
use clap::{Args, ValueEnum};

use crate::error::CliError;

/// User classification selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ClassificationArg {
    /// Regular local account (no profile metadata)
    Standard,
    /// Offline-activated account (packages online.json)
    ActivatedOffline,
}

impl ClassificationArg {
    /// Parse from a config file string.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(ClassificationArg::Standard),
            "activated-offline" => Some(ClassificationArg::ActivatedOffline),
            _ => None,
        }
    }
}

impl From<ClassificationArg> for UserClassification {
    fn from(arg: ClassificationArg) -> Self {
        match arg {
            ClassificationArg::Standard => UserClassification::Standard,
            ClassificationArg::ActivatedOffline => UserClassification::ActivatedOffline,
        }
    }
}

/// Resolve the effective classification: CLI argument, then config file,
/// then `Standard`.
pub fn resolve_classification(
    arg: Option<ClassificationArg>,
    config: &ConfigFile,
) -> UserClassification {
    arg.or_else(|| {
        config
            .classification
            .as_deref()
            .and_then(ClassificationArg::from_config_str)
    })
    .map(UserClassification::from)
    .unwrap_or(UserClassification::Standard)
}

/// FTP endpoint arguments shared by commands that can upload.
#[derive(Debug, Clone, Default, Args)]
pub struct FtpArgs {
    /// FTP host of the console
    #[arg(long)]
    pub host: Option<String>,

    /// FTP control port
    #[arg(long)]
    pub port: Option<u16>,

    /// FTP user name (anonymous login when omitted)
    #[arg(long)]
    pub user: Option<String>,

    /// FTP password
    #[arg(long)]
    pub password: Option<String>,

    /// Remote directory to store archives into
    #[arg(long)]
    pub remote_dir: Option<String>,
}

impl FtpArgs {
    /// Merge these arguments over the config file into an endpoint.
    ///
    /// CLI arguments override config file values when specified. Returns
    /// `None` when neither source names a host.
    pub fn resolve(&self, config: &ConfigFile) -> Option<TransferEndpoint> {
        let host = self.host.clone().or_else(|| config.ftp.host.clone())?;

        let port = self
            .port
            .or(config.ftp.port)
            .unwrap_or(DEFAULT_FTP_PORT);
        let username = self.user.clone().or_else(|| config.ftp.username.clone());
        let password = self
            .password
            .clone()
            .or_else(|| config.ftp.password.clone());
        let remote_dir = self
            .remote_dir
            .clone()
            .or_else(|| config.ftp.remote_dir.clone());

        let mut endpoint = TransferEndpoint::new(host).with_port(port);
        if let (Some(user), Some(pass)) = (username, password) {
            endpoint = endpoint.with_credentials(user, pass);
        }
        if let Some(dir) = remote_dir {
            endpoint = endpoint.with_remote_dir(dir);
        }
        Some(endpoint)
    }

    /// Like [`FtpArgs::resolve`], but a missing host is a usage error.
    pub fn require(&self, config: &ConfigFile) -> Result<TransferEndpoint, CliError> {
        self.resolve(config).ok_or_else(|| {
            CliError::Usage(
                "an FTP host is required: pass --host or set it via 'avatarpak init'".to_string(),
            )
        })
    }
}
