//! # Pi Weather Station
//!
//! Samples the Raspberry Pi's temperature sensor once a minute, stores every
//! reading in a libSQL database and serves them to a small dashboard that
//! polls for updates.
//!
//! ## Components
//!
//! - **Sampler**: reads `/sys/class/thermal/thermal_zone0/temp`, converts
//!   millidegrees to degrees Celsius and appends a reading
//! - **Store**: append-only reading storage listing newest first
//! - **Web server**: `GET /readings` as JSON plus the dashboard assets
//! - **Dashboard**: polling client computing max/min/average and rendering
//!   the current reading and history
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pi_weather_station::{
//!     start_web_server, DatabaseConfig, LibsqlStore, Sampler, ThermalZoneSensor, WebConfig,
//!     DEFAULT_SAMPLE_INTERVAL,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(LibsqlStore::connect(&DatabaseConfig::from_env()?).await?);
//!
//!     Sampler::new(ThermalZoneSensor::default(), store.clone()).spawn(DEFAULT_SAMPLE_INTERVAL);
//!     start_web_server(WebConfig::default(), store).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod reading;
pub mod sampler;
pub mod store;
pub mod web;

use std::time::Duration;

// Re-export public API
pub use config::DatabaseConfig;
pub use dashboard::{DashboardState, HttpSource, Poller, PollerHandle, Stats, StatsMemo, View};
pub use error::{Result, StationError};
pub use reading::{millidegrees_to_celsius, NewReading, Reading};
pub use sampler::{Sampler, TemperatureSensor, ThermalZoneSensor};
pub use store::{LibsqlStore, MemoryStore, ReadingStore};
pub use web::{start_web_server, ListenAddr, WebConfig};

/// How often the sampler records a reading
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(60);

/// The default web server port
pub const DEFAULT_WEB_PORT: u16 = 3000;

/// The default directory holding the dashboard assets
pub const DEFAULT_STATIC_DIR: &str = "site";
