//! Admission decision and per-client bucket

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Outcome of one admission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The request may proceed; one slot was consumed
    Admitted,
    /// The client is over its limit; nothing was recorded
    Rejected {
        /// Time until the oldest retained admission leaves the window
        retry_after: Duration,
    },
}

impl Decision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }

    /// Retry delay for a rejection
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Admitted => None,
            Self::Rejected { retry_after } => Some(*retry_after),
        }
    }
}

/// Recent admissions of one client identity, oldest first
#[derive(Debug, Clone, Default)]
pub(super) struct ClientBucket {
    pub(super) timestamps: VecDeque<Instant>,
}

impl ClientBucket {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: VecDeque::with_capacity(capacity),
        }
    }

    /// Drop every timestamp at least `window` old relative to `now`
    pub(super) fn evict_expired(&mut self, now: Instant, window: Duration) {
        while let Some(&oldest) = self.timestamps.front() {
            if now.saturating_duration_since(oldest) < window {
                break;
            }
            self.timestamps.pop_front();
        }
    }

    /// Number of timestamps still inside the window, without mutating
    pub(super) fn live_count(&self, now: Instant, window: Duration) -> usize {
        self.timestamps
            .iter()
            .filter(|&&t| now.saturating_duration_since(t) < window)
            .count()
    }

    /// True when no timestamp remains inside the window
    pub(super) fn is_idle(&self, now: Instant, window: Duration) -> bool {
        self.timestamps
            .back()
            .is_none_or(|&newest| now.saturating_duration_since(newest) >= window)
    }
}
