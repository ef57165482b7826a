//! Persisted configuration for the CLI front end.
//!
//! The config file remembers last-used settings (FTP endpoint, batch
//! directories, classification) so they do not have to be retyped on every
//! invocation. It is an INI file under the user configuration directory.
//!
//! The core pipeline never reads this file: all of its inputs arrive as
//! explicit call parameters. Only the CLI layer loads the file and merges it
//! underneath command-line arguments (arguments win).

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

use ini::Ini;

use crate::transfer::TransferEndpoint;

/// Last-used FTP endpoint settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FtpSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub remote_dir: Option<String>,
}

/// Last-used batch directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSettings {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// The on-disk configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub ftp: FtpSettings,
    pub batch: BatchSettings,
    /// Last-used classification, as the CLI spelling
    /// (`standard` / `activated-offline`).
    pub classification: Option<String>,
}

/// Default location of the configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("avatarpak")
        .join("config.ini")
}

impl ConfigFile {
    /// Load the configuration from the default location. A missing file
    /// yields the default configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let get = |section: &str, key: &str| {
            ini.section(Some(section))
                .and_then(|s| s.get(key))
                .map(str::to_string)
        };

        Ok(Self {
            ftp: FtpSettings {
                host: get("ftp", "host"),
                port: get("ftp", "port").and_then(|p| p.parse().ok()),
                username: get("ftp", "username"),
                password: get("ftp", "password"),
                remote_dir: get("ftp", "remote_dir"),
            },
            batch: BatchSettings {
                input_dir: get("batch", "input_dir").map(PathBuf::from),
                output_dir: get("batch", "output_dir").map(PathBuf::from),
            },
            classification: get("package", "classification"),
        })
    }

    /// Save the configuration to the default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let mut ini = Ini::new();
        {
            let mut section = ini.with_section(Some("ftp"));
            if let Some(host) = &self.ftp.host {
                section.set("host", host.clone());
            }
            if let Some(port) = self.ftp.port {
                section.set("port", port.to_string());
            }
            if let Some(username) = &self.ftp.username {
                section.set("username", username.clone());
            }
            if let Some(password) = &self.ftp.password {
                section.set("password", password.clone());
            }
            if let Some(remote_dir) = &self.ftp.remote_dir {
                section.set("remote_dir", remote_dir.clone());
            }
        }
        {
            let mut section = ini.with_section(Some("batch"));
            if let Some(input_dir) = &self.batch.input_dir {
                section.set("input_dir", input_dir.to_string_lossy().into_owned());
            }
            if let Some(output_dir) = &self.batch.output_dir {
                section.set("output_dir", output_dir.to_string_lossy().into_owned());
            }
        }
        if let Some(classification) = &self.classification {
            ini.with_section(Some("package"))
                .set("classification", classification.clone());
        }

        ini.write_to_file(path).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a [`TransferEndpoint`] from the stored FTP settings, if a host
    /// is configured.
    pub fn endpoint(&self) -> Option<TransferEndpoint> {
        let host = self.ftp.host.clone()?;
        let mut endpoint = TransferEndpoint::new(host);
        if let Some(port) = self.ftp.port {
            endpoint = endpoint.with_port(port);
        }
        if let (Some(user), Some(pass)) = (&self.ftp.username, &self.ftp.password) {
            endpoint = endpoint.with_credentials(user.clone(), pass.clone());
        }
        if let Some(dir) = &self.ftp.remote_dir {
            endpoint = endpoint.with_remote_dir(dir.clone());
        }
        Some(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&temp.path().join("config.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.ini");

        let config = ConfigFile {
            ftp: FtpSettings {
                host: Some("192.168.1.50".to_string()),
                port: Some(2121),
                username: Some("ps4".to_string()),
                password: Some("secret".to_string()),
                remote_dir: Some("/avatars".to_string()),
            },
            batch: BatchSettings {
                input_dir: Some(PathBuf::from("/images")),
                output_dir: Some(PathBuf::from("/packages")),
            },
            classification: Some("activated-offline".to_string()),
        };

        config.save_to(&path).unwrap();
        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_loads_as_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");

        let config = ConfigFile {
            ftp: FtpSettings {
                host: Some("host.local".to_string()),
                ..FtpSettings::default()
            },
            ..ConfigFile::default()
        };
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded.ftp.host.as_deref(), Some("host.local"));
        assert_eq!(loaded.ftp.port, None);
        assert_eq!(loaded.classification, None);
    }

    #[test]
    fn test_endpoint_requires_host() {
        assert_eq!(ConfigFile::default().endpoint(), None);
    }

    #[test]
    fn test_endpoint_applies_settings() {
        let config = ConfigFile {
            ftp: FtpSettings {
                host: Some("10.0.0.9".to_string()),
                port: Some(21),
                username: Some("u".to_string()),
                password: Some("p".to_string()),
                remote_dir: Some("/up".to_string()),
            },
            ..ConfigFile::default()
        };

        let endpoint = config.endpoint().unwrap();
        assert_eq!(endpoint.address(), "10.0.0.9:21");
        assert_eq!(endpoint.username.as_deref(), Some("u"));
        assert_eq!(endpoint.remote_dir, "/up");
    }

    #[test]
    fn test_endpoint_defaults_without_overrides() {
        let config = ConfigFile {
            ftp: FtpSettings {
                host: Some("console.local".to_string()),
                ..FtpSettings::default()
            },
            ..ConfigFile::default()
        };

        let endpoint = config.endpoint().unwrap();
        assert_eq!(endpoint.port, 2121);
        assert_eq!(endpoint.remote_dir, "/");
        assert_eq!(endpoint.username, None);
    }
}
