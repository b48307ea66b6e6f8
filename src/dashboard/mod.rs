//! Polling dashboard client.
//!
//! The dashboard fetches the full reading list from a station every
//! [`DEFAULT_POLL_INTERVAL`], folds each outcome into a [`DashboardState`] and
//! renders a [`View`] derived from that state. The newest reading is the
//! first element of the list, as guaranteed by the store ordering.

pub mod poller;
pub mod render;
pub mod state;
pub mod stats;

pub use poller::{HttpSource, Poller, PollerHandle, ReadingsSource};
pub use render::{format_temperature, format_timestamp, render};
pub use state::{DashboardState, View};
pub use stats::{Stats, StatsMemo};

use std::future::Future;
use std::time::Duration;
use tracing::info;

/// How often the dashboard re-fetches readings.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Run the dashboard in the terminal until `shutdown` resolves.
///
/// The screen is redrawn after every fetch. Resolving `shutdown` tears the
/// poller down before returning.
pub async fn watch_terminal<S, F>(source: S, period: Duration, shutdown: F)
where
    S: ReadingsSource,
    F: Future<Output = ()>,
{
    let handle = Poller::spawn(source, period);
    let mut updates = handle.subscribe();
    let mut memo = StatsMemo::new();
    tokio::pin!(shutdown);

    loop {
        let frame = {
            let state = updates.borrow_and_update();
            render(&state.view(&mut memo))
        };
        // Clear the screen and home the cursor before each frame.
        print!("\x1B[2J\x1B[H{}", frame);

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = &mut shutdown => break,
        }
    }

    handle.stop();
    info!("Dashboard stopped");
}
