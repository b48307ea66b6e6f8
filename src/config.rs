//! Process configuration read from the environment.

use crate::error::{Result, StationError};
use std::env;

/// Environment variable holding the libSQL database URL.
pub const DATABASE_URL_VAR: &str = "TURSO_DATABASE_URL";
/// Environment variable holding the libSQL auth token.
pub const AUTH_TOKEN_VAR: &str = "TURSO_AUTH_TOKEN";

/// Credentials for the remote reading store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: String,
}

impl DatabaseConfig {
    /// Build the configuration, refusing missing or empty values.
    pub fn new(url: Option<String>, auth_token: Option<String>) -> Result<Self> {
        match (non_empty(url), non_empty(auth_token)) {
            (Some(url), Some(auth_token)) => Ok(Self { url, auth_token }),
            _ => Err(StationError::config_error(
                "Missing Turso environment variables!",
            )),
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(env::var(DATABASE_URL_VAR).ok(), env::var(AUTH_TOKEN_VAR).ok())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
