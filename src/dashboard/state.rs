//! Dashboard state holder and the view derived from it.

use crate::dashboard::stats::{Stats, StatsMemo};
use crate::error::Result;
use crate::reading::Reading;
use std::sync::Arc;

const FALLBACK_ERROR: &str = "An error occurred";

/// Everything the dashboard knows: the last fetched list, the last error and
/// whether a fetch has completed yet.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub readings: Arc<[Reading]>,
    pub error: Option<String>,
    pub loading: bool,
}

/// What the dashboard shows, derived from a [`DashboardState`].
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    /// No fetch has completed yet
    Loading,
    /// The latest fetch failed
    Error(&'a str),
    /// The store has no readings
    Empty,
    /// At least one reading; `current` is the newest
    Populated {
        current: &'a Reading,
        stats: Stats,
        history: &'a [Reading],
    },
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            readings: Arc::from(Vec::new()),
            error: None,
            loading: true,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the outcome of one fetch into the state.
    ///
    /// Success replaces the list and clears the error. Failure records the
    /// error and keeps the previous list.
    pub fn apply(&mut self, result: Result<Vec<Reading>>) {
        match result {
            Ok(readings) => {
                self.readings = readings.into();
                self.error = None;
            }
            Err(err) => {
                let message = err.to_string();
                self.error = Some(if message.is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                });
            }
        }
        self.loading = false;
    }

    /// The newest reading, if any.
    pub fn current(&self) -> Option<&Reading> {
        self.readings.first()
    }

    /// Classify the state for rendering.
    pub fn view(&self, memo: &mut StatsMemo) -> View<'_> {
        if self.loading {
            return View::Loading;
        }
        if let Some(error) = &self.error {
            return View::Error(error.as_str());
        }

        match (self.current(), memo.get(&self.readings)) {
            (Some(current), Some(stats)) => View::Populated {
                current,
                stats,
                history: &self.readings[..],
            },
            _ => View::Empty,
        }
    }
}
