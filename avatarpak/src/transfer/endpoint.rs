//! Transfer endpoint description.

/// Default control port of the console-side FTP server.
pub const DEFAULT_FTP_PORT: u16 = 2121;

/// A remote FTP destination for produced archives.
///
/// # Example
///
/// ```
/// use avatarpak::transfer::{TransferEndpoint, DEFAULT_FTP_PORT};
///
/// let endpoint = TransferEndpoint::new("192.168.1.100")
///     .with_credentials("user", "secret")
///     .with_remote_dir("/avatars");
///
/// assert_eq!(endpoint.port, DEFAULT_FTP_PORT);
/// assert_eq!(endpoint.address(), "192.168.1.100:2121");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEndpoint {
    /// Host name or address of the FTP server.
    pub host: String,
    /// Control connection port.
    pub port: u16,
    /// Login user name; anonymous login is attempted when absent.
    pub username: Option<String>,
    /// Login password; only used together with `username`.
    pub password: Option<String>,
    /// Remote directory the archive is stored into.
    pub remote_dir: String,
}

impl TransferEndpoint {
    /// Create an endpoint with the default port, anonymous login and the
    /// root remote directory.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_FTP_PORT,
            username: None,
            password: None,
            remote_dir: "/".to_string(),
        }
    }

    /// Override the control port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Use credential login instead of anonymous.
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Override the remote directory.
    pub fn with_remote_dir(mut self, dir: impl Into<String>) -> Self {
        self.remote_dir = dir.into();
        self
    }

    /// `host:port` form used for the control connection.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
