//! Request pacing for the MusicBrainz rate limit (1 req/sec for identified clients).
//!
//! One [`Pacer`] is shared by every request a client makes. Each call
//! reserves a slot under the lock and then sleeps outside it:
//!
//! ```text
//! slot = max(now, last_slot) + interval
//! ```
//!
//! So every request waits at least `interval` after it was issued, and
//! slots handed to concurrent callers are spaced `interval` apart.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Shared single-slot pacing gate
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last_slot: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_slot: Mutex::new(None),
        }
    }

    /// Wait for this caller's turn to hit the network.
    ///
    /// Returns the instant the slot was scheduled for.
    pub async fn wait(&self) -> Instant {
        let slot = {
            let mut last = self.last_slot.lock().await;
            let now = Instant::now();
            let base = match *last {
                Some(prev) if prev > now => prev,
                _ => now,
            };
            let slot = base + self.interval;
            *last = Some(slot);
            slot
        };

        tracing::debug!(
            "Pacing: waiting {:?} before next request",
            slot.saturating_duration_since(Instant::now())
        );
        tokio::time::sleep_until(slot).await;
        slot
    }
}
