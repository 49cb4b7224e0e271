//! Idle bucket maintenance

use super::controller::AdmissionController;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

impl AdmissionController {
    /// Remove buckets with nothing left inside the window
    ///
    /// Returns how many identities were dropped. A dropped identity starts
    /// over with an empty bucket, which is indistinguishable from a bucket
    /// whose entries were all evicted.
    pub fn sweep_idle(&self, now: Instant) -> usize {
        let window = self.window;
        let mut table = self.table.lock();
        let before = table.len();
        table.retain(|_, bucket| !bucket.is_idle(now, window));
        before - table.len()
    }

    /// Start the background sweep task
    ///
    /// The task runs until the returned handle is aborted.
    pub fn spawn_sweeper(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;

            loop {
                interval.tick().await;
                let removed = self.sweep_idle(Instant::now());
                if removed > 0 {
                    debug!(
                        removed,
                        remaining = self.tracked_identities(),
                        "Swept idle admission buckets"
                    );
                }
            }
        })
    }
}
