//! Durable, append-only storage for temperature readings.
//!
//! Every backend hands out increasing identifiers on insert and lists readings
//! newest first. The dashboard relies on that ordering to treat the first
//! element as the current reading.

pub mod memory;
pub mod remote;

pub use memory::MemoryStore;
pub use remote::LibsqlStore;

use crate::error::Result;
use crate::reading::{NewReading, Reading};
use async_trait::async_trait;

/// A record store holding readings.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Append a reading and return it with its assigned identifier.
    async fn insert(&self, reading: NewReading) -> Result<Reading>;

    /// All stored readings, most recent first.
    async fn list(&self) -> Result<Vec<Reading>>;
}
