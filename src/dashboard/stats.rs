//! Summary statistics over a list of readings.

use crate::reading::Reading;
use std::sync::Arc;

/// Maximum, minimum and mean temperature of a reading list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

impl Stats {
    /// Compute the statistics, or `None` for an empty list.
    pub fn from_readings(readings: &[Reading]) -> Option<Stats> {
        if readings.is_empty() {
            return None;
        }

        let temps = readings.iter().map(|r| r.temperature);
        let max = temps.clone().fold(f64::NEG_INFINITY, f64::max);
        let min = temps.clone().fold(f64::INFINITY, f64::min);
        let avg = temps.sum::<f64>() / readings.len() as f64;

        Some(Stats { max, min, avg })
    }
}

/// Caches [`Stats`] against the list they were computed from.
///
/// The key is the identity of the shared list, so replacing the list with a
/// new allocation always forces a recomputation.
#[derive(Debug, Default)]
pub struct StatsMemo {
    key: Option<Arc<[Reading]>>,
    value: Option<Stats>,
}

impl StatsMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats for `readings`, recomputed only when the list changed.
    pub fn get(&mut self, readings: &Arc<[Reading]>) -> Option<Stats> {
        let fresh = matches!(&self.key, Some(key) if Arc::ptr_eq(key, readings));
        if !fresh {
            self.value = Stats::from_readings(readings);
            self.key = Some(Arc::clone(readings));
        }
        self.value
    }
}
