//! Data structures for temperature readings.

use crate::error::{Result, StationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped temperature sample as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Store-assigned identifier, increasing in creation order
    pub id: i64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// When the reading was inserted
    pub timestamp: DateTime<Utc>,
}

/// A reading that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewReading {
    pub temperature: f64,
    pub timestamp: DateTime<Utc>,
}

impl NewReading {
    /// Create a reading stamped with the current time.
    pub fn now(temperature: f64) -> Self {
        Self {
            temperature,
            timestamp: Utc::now(),
        }
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: i64) -> Reading {
        Reading {
            id,
            temperature: self.temperature,
            timestamp: self.timestamp,
        }
    }
}

/// Convert raw sensor text in thousandths of a degree to degrees Celsius.
pub fn millidegrees_to_celsius(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let millidegrees = trimmed
        .parse::<f64>()
        .map_err(|e| StationError::invalid_reading(format!("{:?}: {}", trimmed, e)))?;

    if !millidegrees.is_finite() {
        return Err(StationError::invalid_reading(format!(
            "{:?} is not a finite number",
            trimmed
        )));
    }

    Ok(millidegrees / 1000.0)
}
