//! Web server and API endpoints for the weather station.
//!
//! Serves the stored readings as JSON at `/readings` next to the dashboard
//! assets, over either TCP or a filesystem socket.

pub mod config;
pub mod handlers;
pub mod router;

// Re-export commonly used items
pub use config::{ListenAddr, WebConfig};
pub use router::create_app;

use crate::error::{Result, StationError};
use crate::store::ReadingStore;
use std::sync::Arc;
use tracing::info;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReadingStore>,
}

/// Start the web server with the provided configuration and store.
pub async fn start_web_server(config: WebConfig, store: Arc<dyn ReadingStore>) -> Result<()> {
    let app = create_app(&config, store);

    info!("Starting weather station web server on {}", config.listen);
    info!("Readings endpoint: {}/readings", config.listen);

    match &config.listen {
        ListenAddr::Tcp { host, port } => {
            let listener = tokio::net::TcpListener::bind((host.as_str(), *port))
                .await
                .map_err(|e| {
                    StationError::web_server_error(format!("Failed to bind to address: {}", e))
                })?;

            axum::serve(listener, app)
                .await
                .map_err(|e| StationError::web_server_error(format!("Server error: {}", e)))?;
        }
        #[cfg(unix)]
        ListenAddr::Unix(path) => {
            let listener = unix::bind_socket(path)?;

            axum::serve(listener, app)
                .await
                .map_err(|e| StationError::web_server_error(format!("Server error: {}", e)))?;
        }
        #[cfg(not(unix))]
        ListenAddr::Unix(path) => {
            return Err(StationError::config_error(format!(
                "Socket path {} is not supported on this platform",
                path.display()
            )));
        }
    }

    Ok(())
}

#[cfg(unix)]
pub mod unix {
    //! Filesystem socket binding.

    use crate::error::{Result, StationError};
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tokio::net::UnixListener;
    use tracing::{debug, info};

    /// Mode applied to the socket so other local processes can connect.
    pub const SOCKET_MODE: u32 = 0o666;

    /// Bind a socket at `path`, replacing a stale socket file and relaxing
    /// its permissions afterwards.
    pub fn bind_socket(path: &Path) -> Result<UnixListener> {
        if path.exists() {
            debug!("Removing stale socket {}", path.display());
            fs::remove_file(path)?;
        }

        let listener = UnixListener::bind(path).map_err(|e| {
            StationError::web_server_error(format!(
                "Failed to bind to socket {}: {}",
                path.display(),
                e
            ))
        })?;
        fs::set_permissions(path, Permissions::from_mode(SOCKET_MODE))?;
        info!("Listening on socket {}", path.display());

        Ok(listener)
    }

}
