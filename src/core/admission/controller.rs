//! Sliding-window admission controller

use super::types::{ClientBucket, Decision};
use crate::config::RateLimitConfig;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Per-client sliding-window log
///
/// Each identity may be admitted at most `max_requests` times within any
/// trailing `window`. The whole table sits behind one lock; the critical
/// section is bounded by `max_requests` and never performs I/O.
#[derive(Debug)]
pub struct AdmissionController {
    pub(super) max_requests: u32,
    pub(super) window: Duration,
    pub(super) table: Mutex<HashMap<String, ClientBucket>>,
}

impl AdmissionController {
    /// Create a controller admitting `max_requests` per `window`
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            table: Mutex::new(HashMap::new()),
        }
    }

    /// Create a controller from validated configuration
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, config.window())
    }

    /// Decide whether `identity` may make a request at `now`
    ///
    /// Expired timestamps are evicted first. On admission `now` is appended;
    /// on rejection the bucket is left as it is. Callers that read the clock
    /// before taking the lock may arrive out of order, so `now` is raised to
    /// the newest recorded admission to keep each bucket sorted.
    pub fn try_admit(&self, identity: &str, now: Instant) -> Decision {
        let mut table = self.table.lock();
        // Avoid String allocation if the identity is already tracked
        let bucket = if let Some(b) = table.get_mut(identity) {
            b
        } else {
            table
                .entry(identity.to_string())
                .or_insert_with(|| ClientBucket::with_capacity(self.max_requests as usize))
        };

        let now = bucket
            .timestamps
            .back()
            .map_or(now, |&newest| newest.max(now));
        bucket.evict_expired(now, self.window);

        if bucket.timestamps.len() < self.max_requests as usize {
            bucket.timestamps.push_back(now);
            return Decision::Admitted;
        }

        let retry_after = bucket
            .timestamps
            .front()
            .map(|&oldest| {
                self.window
                    .saturating_sub(now.saturating_duration_since(oldest))
            })
            .unwrap_or_default();

        debug!(
            identity = %identity,
            count = bucket.timestamps.len(),
            limit = self.max_requests,
            retry_after_secs = retry_after.as_secs(),
            "Admission rejected"
        );

        Decision::Rejected { retry_after }
    }

    /// Admissions by `identity` still inside the window at `now`
    pub fn in_window(&self, identity: &str, now: Instant) -> usize {
        self.table
            .lock()
            .get(identity)
            .map_or(0, |bucket| bucket.live_count(now, self.window))
    }

    /// Number of identities currently holding a bucket
    pub fn tracked_identities(&self) -> usize {
        self.table.lock().len()
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
