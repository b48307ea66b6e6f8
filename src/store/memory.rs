//! In-process reading store.

use crate::error::Result;
use crate::reading::{NewReading, Reading};
use crate::store::ReadingStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Reading store backed by a vector, for tests and database-less runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    readings: RwLock<Vec<Reading>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored readings.
    pub async fn len(&self) -> usize {
        self.readings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.readings.read().await.is_empty()
    }
}

#[async_trait]
impl ReadingStore for MemoryStore {
    async fn insert(&self, reading: NewReading) -> Result<Reading> {
        // The write lock serializes writers, so ids stay unique.
        let mut readings = self.readings.write().await;
        let id = readings.last().map_or(1, |last| last.id + 1);
        let stored = reading.with_id(id);
        readings.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Reading>> {
        let readings = self.readings.read().await;
        Ok(readings.iter().rev().cloned().collect())
    }
}
