//! Search subscription
//!
//! Drives list fetching from a single dependency, the search text:
//!
//! - a changed dependency schedules one fetch after the debounce window;
//!   further changes inside the window push the deadline back
//! - [`SearchSubscription::refresh`] schedules an immediate fetch (after writes)
//! - every fetch carries a sequence number, and a response older than the
//!   latest one already applied is dropped

use std::time::{Duration, Instant};

/// A list request to issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub seq: u64,
    pub search: String,
}

#[derive(Debug)]
pub struct SearchSubscription {
    debounce: Duration,
    /// Last dependency value seen; `None` before mount
    observed: Option<String>,
    /// Scheduled fetch: (search, due)
    pending: Option<(String, Instant)>,
    next_seq: u64,
    applied_seq: u64,
}

impl SearchSubscription {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            observed: None,
            pending: None,
            next_seq: 0,
            applied_seq: 0,
        }
    }

    /// Report the current search text; the first observation (mount) fetches immediately
    pub fn observe(&mut self, search: &str, now: Instant) {
        match &self.observed {
            Some(prev) if prev == search => {}
            Some(_) => {
                self.observed = Some(search.to_string());
                self.pending = Some((search.to_string(), now + self.debounce));
            }
            None => {
                self.observed = Some(search.to_string());
                self.pending = Some((search.to_string(), now));
            }
        }
    }

    /// Re-fetch the current dependency value without waiting
    pub fn refresh(&mut self, now: Instant) {
        let search = self.observed.clone().unwrap_or_default();
        self.pending = Some((search, now));
    }

    /// Issue the scheduled fetch once it is due
    pub fn poll(&mut self, now: Instant) -> Option<Fetch> {
        match &self.pending {
            Some((_, due)) if *due <= now => {}
            _ => return None,
        }
        let (search, _) = self.pending.take()?;
        self.next_seq += 1;
        Some(Fetch {
            seq: self.next_seq,
            search,
        })
    }

    /// Whether the response for `seq` may replace the displayed list
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq <= self.applied_seq {
            tracing::debug!(seq, applied = self.applied_seq, "Dropping stale list response");
            return false;
        }
        self.applied_seq = seq;
        true
    }

    /// True while a fetch is scheduled but not yet issued
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
