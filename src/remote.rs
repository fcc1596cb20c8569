//! # High-Level Remote Ref Lookups
//!
//! This module provides the `RemoteInfoService`, the public face of the
//! adapter. It composes the cached quick listing, the verbose per-ref
//! report, and the metadata fetch into three lookup operations, and owns
//! the pacing policy that keeps the external tool from hammering the
//! remote's backend.
//!
//! ## Design
//!
//! The service holds a boxed [`RemoteCommands`] implementation: the real
//! flatpak binary in production, a scripted mock in tests. Everything that
//! touches the external tool stays swappable behind that trait.
//!
//! ## Failure policy
//!
//! No public operation raises. Every lower-level failure (command failure,
//! watchdog timeout, malformed date) is logged together with the
//! remote/arch/id that triggered it and collapsed into an absent or empty
//! result. Callers that need to distinguish causes read the log.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, error, warn};

use crate::cache::ListingCache;
use crate::error::Result;
use crate::flatpak::{FlatpakCli, RemoteCommands};
use crate::model::RefRemoteInfo;
use crate::parse;

/// Fixed delays between dependent flatpak invocations.
#[derive(Debug, Clone)]
pub struct Pacing {
    /// Pause between the detail fetch and the metadata fetch for the same
    /// ref. Back-to-back queries against the same remote have been seen to
    /// trip server-side rate limiting.
    pub metadata_delay: Duration,
    /// Pause before the single retry of an absent full lookup.
    pub retry_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            metadata_delay: Duration::from_millis(300),
            retry_delay: Duration::from_secs(5),
        }
    }
}

/// The main entry point for querying a remote's refs.
pub struct RemoteInfoService {
    commands: Box<dyn RemoteCommands>,
    cache: ListingCache,
    pacing: Pacing,
}

impl RemoteInfoService {
    /// Creates a service backed by the system flatpak binary.
    pub fn new() -> Self {
        Self::with_commands(Box::new(FlatpakCli::default()))
    }

    /// Creates a service with a custom [`RemoteCommands`] implementation.
    ///
    /// This is how the CLI points the service at an alternative binary and
    /// how tests inject scripted mocks.
    pub fn with_commands(commands: Box<dyn RemoteCommands>) -> Self {
        Self {
            commands,
            cache: ListingCache::new(),
            pacing: Pacing::default(),
        }
    }

    /// Overrides the pacing delays. Tests run with zero delays.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Every ref in `remote`, from the cached quick listing.
    ///
    /// Lines that do not parse as records are dropped; a lower-level
    /// failure yields an empty list.
    pub fn list_quick(&self, remote: &str) -> Vec<RefRemoteInfo> {
        debug!("Getting quick remote info for all refs in remote {}", remote);

        match self.quick_lines(remote) {
            Ok(lines) => lines
                .iter()
                .filter_map(|line| parse::parse_listing_line(line))
                .collect(),
            Err(err) => {
                error!("Quick listing of remote {} failed: {}", remote, err);
                Vec::new()
            }
        }
    }

    /// The first quick-listing record whose id and arch match the request,
    /// compared case-insensitively.
    pub fn find_quick(&self, remote: &str, arch: &str, id: &str) -> Option<RefRemoteInfo> {
        debug!(
            "Getting quick remote info for {} ({}) in remote {}",
            id, arch, remote
        );

        match self.quick_lines(remote) {
            Ok(lines) => lines
                .iter()
                .filter_map(|line| parse::parse_listing_line(line))
                .find(|info| {
                    info.identity.id.eq_ignore_ascii_case(id)
                        && info.identity.arch.eq_ignore_ascii_case(arch)
                }),
            Err(err) => {
                error!(
                    "Quick lookup of {} ({}) in remote {} failed: {}",
                    id, arch, remote, err
                );
                None
            }
        }
    }

    /// The complete record for one ref: verbose report, history chain, and
    /// metadata blob.
    ///
    /// The expensive report command only runs for refs that appear in the
    /// cheap quick listing. A metadata failure is logged and leaves the
    /// record without metadata; it does not make the lookup absent.
    pub fn find_full(&self, remote: &str, arch: &str, id: &str) -> Option<RefRemoteInfo> {
        debug!(
            "Getting remote info for {} ({}) in remote {}",
            id, arch, remote
        );

        if self.find_quick(remote, arch, id).is_none() {
            debug!(
                "Ref {} ({}) not in the quick listing of remote {}; skipping remote-info",
                id, arch, remote
            );
            return None;
        }

        let parsed = self
            .commands
            .remote_info_log(remote, arch, id)
            .and_then(|text| parse::parse_remote_info(&text));

        let mut info = match parsed {
            Ok(info) => info,
            Err(err) => {
                error!(
                    "Remote info for {} ({}) in remote {} failed: {}",
                    id, arch, remote, err
                );
                return None;
            }
        };

        thread::sleep(self.pacing.metadata_delay);
        info.metadata = self.fetch_metadata(remote, arch, id);

        Some(info)
    }

    /// [`find_full`](Self::find_full), retried exactly once after a pause
    /// when the first attempt comes back absent.
    pub fn find_full_with_retry(
        &self,
        remote: &str,
        arch: &str,
        id: &str,
        retry_if_absent: bool,
    ) -> Option<RefRemoteInfo> {
        let first = self.find_full(remote, arch, id);
        if first.is_some() || !retry_if_absent {
            return first;
        }

        warn!(
            "Waiting {:?} to try the remote-info again for {} ...",
            self.pacing.retry_delay, id
        );
        thread::sleep(self.pacing.retry_delay);
        self.find_full(remote, arch, id)
    }

    /// The raw metadata blob for one ref, passed through unmodified.
    pub fn fetch_metadata(&self, remote: &str, arch: &str, id: &str) -> Option<String> {
        debug!(
            "Getting remote metadata for {} ({}) in remote {}",
            id, arch, remote
        );

        match self.commands.remote_metadata(remote, arch, id) {
            Ok(text) => Some(text),
            Err(err) => {
                error!(
                    "Remote metadata for {} ({}) in remote {} failed: {}",
                    id, arch, remote, err
                );
                None
            }
        }
    }

    fn quick_lines(&self, remote: &str) -> Result<Arc<Vec<String>>> {
        self.cache.lines(remote, || self.commands.remote_ls(remote))
    }
}

impl Default for RemoteInfoService {
    fn default() -> Self {
        Self::new()
    }
}
