//! In-process caching of quick-listing output
//!
//! The bulk listing is by far the most frequently repeated flatpak
//! invocation, so its line-split output is cached for a short while. Each
//! remote gets its own slot; a slot is only ever replaced as a whole, so
//! concurrent readers either see the previous complete listing or the new
//! one, never a half-written mixture.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{Error, Result};

/// How long a cached listing stays valid.
pub const LISTING_TTL: Duration = Duration::from_secs(5 * 60);

/// One remote's cached listing plus the instant it was fetched.
#[derive(Debug, Clone)]
struct ListingSlot {
    lines: Arc<Vec<String>>,
    fetched_at: Instant,
}

/// TTL cache of line-split bulk-listing output, keyed by remote name.
#[derive(Debug)]
pub struct ListingCache {
    slots: Mutex<HashMap<String, ListingSlot>>,
    ttl: Duration,
}

impl ListingCache {
    /// Create an empty cache with the standard 5-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(LISTING_TTL)
    }

    /// Create an empty cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// The cached listing lines for `remote`, refreshed through `fetch`
    /// when the slot is missing or older than the TTL.
    ///
    /// The fetch runs without the lock held, so two callers racing on an
    /// expired slot may both invoke it; each publishes a complete slot and
    /// the last writer wins. A failed fetch leaves any previous slot in
    /// place for the next attempt.
    pub fn lines<F>(&self, remote: &str, fetch: F) -> Result<Arc<Vec<String>>>
    where
        F: FnOnce() -> Result<String>,
    {
        {
            let slots = self.lock()?;
            if let Some(slot) = slots.get(remote) {
                if slot.fetched_at.elapsed() < self.ttl {
                    return Ok(Arc::clone(&slot.lines));
                }
            }
        }

        debug!("Refreshing listing cache for remote {}", remote);
        let raw = fetch()?;
        let lines: Arc<Vec<String>> = Arc::new(raw.lines().map(str::to_string).collect());

        let mut slots = self.lock()?;
        slots.insert(
            remote.to_string(),
            ListingSlot {
                lines: Arc::clone(&lines),
                fetched_at: Instant::now(),
            },
        );
        Ok(lines)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, ListingSlot>>> {
        self.slots.lock().map_err(|_| Error::LockPoisoned {
            context: "listing cache".to_string(),
        })
    }
}

impl Default for ListingCache {
    fn default() -> Self {
        Self::new()
    }
}
