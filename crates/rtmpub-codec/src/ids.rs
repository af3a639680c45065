//! Request correlation ids.

use std::sync::atomic::{AtomicU64, Ordering};

use rtmpub_core::error::{Result, RtmError};

/// Monotonic id source shared by concurrent writers.
///
/// Ids never wrap: once `u64::MAX` would be reached the source is exhausted
/// and `next_id` fails instead of handing out a duplicate.
#[derive(Debug)]
pub struct RequestIds {
    next: AtomicU64,
}

impl Default for RequestIds {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RequestIds {
    pub fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Take the next id.
    pub fn next_id(&self) -> Result<u64> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_err(|_| RtmError::Internal("request ids exhausted".into()))
    }
}
