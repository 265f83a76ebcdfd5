//! Staleness-aware single-value cache.

use std::time::{Duration, Instant};

/// How long a resolved session is trusted before it is re-verified.
pub const SESSION_STALE_AFTER: Duration = Duration::from_secs(60);

/// A single cached value with an age-based expiry policy.
///
/// The cell distinguishes "never set" from "set but stale": a stale value
/// still reads through [`StaleCell::peek`], so callers can show the last
/// known state while a refresh is underway. Writes always win over age,
/// the cell carries no in-flight bookkeeping.
#[derive(Debug)]
pub struct StaleCell<T> {
    entry: Option<(T, Instant)>,
    stale_after: Duration,
}

impl<T> StaleCell<T> {
    /// Create an empty cell with the given staleness window.
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entry: None,
            stale_after,
        }
    }

    /// Get the value if one is present and still fresh.
    pub fn get(&self) -> Option<&T> {
        match &self.entry {
            Some((value, fetched_at)) if fetched_at.elapsed() < self.stale_after => Some(value),
            _ => None,
        }
    }

    /// Get the value regardless of age.
    pub fn peek(&self) -> Option<&T> {
        self.entry.as_ref().map(|(value, _)| value)
    }

    /// Store a value, marking it fresh as of now.
    pub fn set(&mut self, value: T) {
        self.entry = Some((value, Instant::now()));
    }

    /// Drop the value; the next [`StaleCell::get`] misses.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
