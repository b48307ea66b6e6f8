//! Remote libSQL (Turso) reading store.

use crate::config::DatabaseConfig;
use crate::error::{Result, StationError};
use crate::reading::{NewReading, Reading};
use crate::store::ReadingStore;
use async_trait::async_trait;
use chrono::DateTime;
use libsql::{params, Builder, Connection, Row};
use tracing::{debug, info};

// Timestamps are unix epoch milliseconds.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS TemperatureReading (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    temperature REAL NOT NULL,
    timestamp INTEGER NOT NULL
)";

const INSERT_READING: &str =
    "INSERT INTO TemperatureReading (temperature, timestamp) VALUES (?1, ?2) RETURNING id";

const LIST_READINGS: &str =
    "SELECT id, temperature, timestamp FROM TemperatureReading ORDER BY id DESC";

/// Reading store living in a remote libSQL database.
pub struct LibsqlStore {
    conn: Connection,
}

impl LibsqlStore {
    /// Connect to the database and make sure the readings table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db = Builder::new_remote(config.url.clone(), config.auth_token.clone())
            .build()
            .await?;
        let conn = db.connect()?;

        conn.execute(CREATE_TABLE, ()).await?;
        info!("Connected to reading store at {}", config.url);

        Ok(Self { conn })
    }
}

fn reading_from_row(row: &Row) -> Result<Reading> {
    let id: i64 = row.get(0)?;
    let temperature: f64 = row.get(1)?;
    let millis: i64 = row.get(2)?;
    let timestamp = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        StationError::store_error(format!("Reading {} has invalid timestamp {}", id, millis))
    })?;

    Ok(Reading {
        id,
        temperature,
        timestamp,
    })
}

#[async_trait]
impl ReadingStore for LibsqlStore {
    async fn insert(&self, reading: NewReading) -> Result<Reading> {
        let mut rows = self
            .conn
            .query(
                INSERT_READING,
                params![reading.temperature, reading.timestamp.timestamp_millis()],
            )
            .await?;

        let row = rows
            .next()
            .await?
            .ok_or_else(|| StationError::store_error("Insert returned no id"))?;
        let id: i64 = row.get(0)?;
        debug!("Stored reading {} ({}°C)", id, reading.temperature);

        Ok(reading.with_id(id))
    }

    async fn list(&self) -> Result<Vec<Reading>> {
        let mut rows = self.conn.query(LIST_READINGS, ()).await?;
        let mut readings = Vec::new();

        while let Some(row) = rows.next().await? {
            readings.push(reading_from_row(&row)?);
        }

        Ok(readings)
    }
}
