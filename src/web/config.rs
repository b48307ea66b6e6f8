//! Web server configuration.

use std::fmt;
use std::path::PathBuf;

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenAddr {
    /// A TCP host and port
    Tcp { host: String, port: u16 },
    /// A filesystem socket path
    Unix(PathBuf),
}

impl fmt::Display for ListenAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenAddr::Tcp { host, port } => write!(f, "http://{}:{}", host, port),
            ListenAddr::Unix(path) => write!(f, "unix:{}", path.display()),
        }
    }
}

/// Configuration for the web server.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address to bind the server to
    pub listen: ListenAddr,
    /// Whether to enable CORS
    pub enable_cors: bool,
    /// Path to serve static files from
    pub static_path: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            listen: ListenAddr::Tcp {
                host: "0.0.0.0".to_string(),
                port: crate::DEFAULT_WEB_PORT,
            },
            enable_cors: false,
            static_path: Some(PathBuf::from(crate::DEFAULT_STATIC_DIR)),
        }
    }
}

impl WebConfig {
    /// Create a new web configuration listening on a TCP host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            listen: ListenAddr::Tcp {
                host: host.into(),
                port,
            },
            ..Default::default()
        }
    }

    /// Pick the listen address: a socket path wins over a port.
    pub fn from_listen_options(host: &str, port: u16, socket: Option<PathBuf>) -> Self {
        match socket {
            Some(path) => Self::default().with_socket_path(path),
            None => Self::new(host, port),
        }
    }

    /// Listen on a TCP port, keeping the current host.
    pub fn with_port(mut self, port: u16) -> Self {
        let host = match self.listen {
            ListenAddr::Tcp { host, .. } => host,
            ListenAddr::Unix(_) => "0.0.0.0".to_string(),
        };
        self.listen = ListenAddr::Tcp { host, port };
        self
    }

    /// Listen on a filesystem socket instead of TCP.
    pub fn with_socket_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.listen = ListenAddr::Unix(path.into());
        self
    }

    /// Enable or disable CORS.
    pub fn with_cors(mut self, enable_cors: bool) -> Self {
        self.enable_cors = enable_cors;
        self
    }

    /// Set the static files path.
    pub fn with_static_path(mut self, path: Option<PathBuf>) -> Self {
        self.static_path = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_takes_precedence() {
        let config = WebConfig::from_listen_options("0.0.0.0", 3000, Some("/tmp/ws.sock".into()));
        assert_eq!(config.listen, ListenAddr::Unix("/tmp/ws.sock".into()));

        let config = WebConfig::from_listen_options("127.0.0.1", 3000, None);
        assert_eq!(
            config.listen,
            ListenAddr::Tcp {
                host: "127.0.0.1".to_string(),
                port: 3000
            }
        );
    }

    #[test]
    fn test_listen_display() {
        assert_eq!(WebConfig::new("127.0.0.1", 8080).listen.to_string(), "http://127.0.0.1:8080");
        assert_eq!(
            WebConfig::default().with_socket_path("/run/ws.sock").listen.to_string(),
            "unix:/run/ws.sock"
        );
    }
}
