//! Polling loop feeding the dashboard state.

use crate::dashboard::state::DashboardState;
use crate::error::{Result, StationError};
use crate::reading::Reading;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

/// Where the dashboard gets its readings from.
pub trait ReadingsSource: Send + Sync + 'static {
    /// Fetch the complete reading list, newest first.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Reading>>> + Send;
}

/// Fetches readings from a running station over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Source for the station at `base_url`, e.g. `http://raspberrypi.local:3000`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Same as [`HttpSource::new`] with a preconfigured client.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            url: format!("{}/readings", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReadingsSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Reading>> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            debug!("GET {} returned {}", self.url, response.status());
            return Err(StationError::fetch_error("Failed to fetch readings"));
        }

        Ok(response.json().await?)
    }
}

/// Starts the polling loop.
pub struct Poller;

impl Poller {
    /// Fetch immediately, then once every `period`, until the returned
    /// handle is stopped or dropped.
    ///
    /// Fetches are not deduplicated: a slow fetch may overlap the next one,
    /// and whichever resolves last wins.
    pub fn spawn<S: ReadingsSource>(source: S, period: Duration) -> PollerHandle {
        let source = Arc::new(source);
        let (tx, rx) = watch::channel(DashboardState::new());
        let tx = Arc::new(tx);
        let mounted = Arc::new(AtomicBool::new(true));

        let timer = tokio::spawn({
            let mounted = Arc::clone(&mounted);
            async move {
                let mut interval = time::interval(period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;

                    let source = Arc::clone(&source);
                    let tx = Arc::clone(&tx);
                    let mounted = Arc::clone(&mounted);
                    tokio::spawn(async move {
                        let result = source.fetch().await;
                        if let Err(err) = &result {
                            warn!("Fetching readings failed: {}", err);
                        }
                        // Results arriving after teardown are dropped.
                        if mounted.load(Ordering::Acquire) {
                            tx.send_modify(|state| state.apply(result));
                        }
                    });
                }
            }
        });

        PollerHandle {
            state: rx,
            mounted,
            timer,
        }
    }
}

/// Owner of a running poller. Dropping it tears the poller down.
#[derive(Debug)]
pub struct PollerHandle {
    state: watch::Receiver<DashboardState>,
    mounted: Arc<AtomicBool>,
    timer: JoinHandle<()>,
}

impl PollerHandle {
    /// A receiver notified whenever a fetch updates the state.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.clone()
    }

    /// A copy of the current state.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Cancel the polling timer and ignore in-flight fetches.
    pub fn stop(self) {}
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.mounted.store(false, Ordering::Release);
        self.timer.abort();
    }
}
