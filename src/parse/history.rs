//! Parsing of the embedded commit-history block.
//!
//! After the `History:` marker the report repeats a 3-line pattern per
//! prior commit: `Commit:`, `Subject:`, `Date:`. The scan is non-greedy: a
//! window that does not match advances by a single line, so a malformed or
//! interleaved triplet shifts the window instead of aborting the block.

use std::sync::Arc;

use crate::error::Result;
use crate::model::RefRemoteInfo;
use crate::parse::detail::{parse_remote_info, LABEL_COMMIT, LABEL_DATE, LABEL_SUBJECT};

/// Scan `lines` for Commit/Subject/Date triplets and build the ordered
/// history chain for `current`, newest first.
///
/// Each snapshot inherits `current`'s identity and collection id (the
/// triplets carry no identity of their own) and is never end-of-life: a
/// historical snapshot cannot represent the current deprecation state.
/// Entry *i*'s `parent_commit` is entry *i+1*'s commit, and its `history`
/// holds `Arc` clones of the strict suffix *i+1..*, shared with the owning
/// record rather than copied per entry.
pub fn parse_history(current: &RefRemoteInfo, lines: &[&str]) -> Result<Vec<Arc<RefRemoteInfo>>> {
    let mut snapshots: Vec<RefRemoteInfo> = Vec::new();

    let mut cursor = 0;
    while cursor < lines.len() {
        let is_triplet = cursor + 2 < lines.len()
            && lines[cursor].trim().starts_with(LABEL_COMMIT)
            && lines[cursor + 1].trim().starts_with(LABEL_SUBJECT)
            && lines[cursor + 2].trim().starts_with(LABEL_DATE);

        if is_triplet {
            let block = format!(
                "{}\n{}\n{}",
                lines[cursor].trim(),
                lines[cursor + 1].trim(),
                lines[cursor + 2].trim()
            );
            let mut snapshot = parse_remote_info(&block)?;

            // The triplet only carries commit/subject/date; everything
            // identifying comes from the owning record.
            snapshot.identity = current.identity.clone();
            snapshot.collection_id = current.collection_id.clone();
            snapshot.end_of_life = false;

            snapshots.push(snapshot);
            cursor += 3;
        } else {
            cursor += 1;
        }
    }

    for index in 0..snapshots.len().saturating_sub(1) {
        snapshots[index].parent_commit = snapshots[index + 1].commit.clone();
    }

    // Build back to front so every entry shares its suffix with the owner
    // instead of materializing a copy per entry. `suffix` always holds the
    // already-built entries oldest-first.
    let mut suffix: Vec<Arc<RefRemoteInfo>> = Vec::with_capacity(snapshots.len());
    for mut snapshot in snapshots.into_iter().rev() {
        snapshot.history = suffix.iter().rev().cloned().collect();
        suffix.push(Arc::new(snapshot));
    }
    suffix.reverse();
    Ok(suffix)
}
