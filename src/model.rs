//! # Remote Ref Records
//!
//! This module defines the structured records produced by the parsers: the
//! decomposed ref identity and the full per-ref report assembled from the
//! quick listing, the verbose remote-info output, and the metadata blob.
//!
//! Records are plain data: they are created fresh per parse call, fully
//! populated in one pass, optionally enriched with metadata by the lookup
//! service, and handed to the caller. There is no persistence and no
//! identity beyond structural equality.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Number of `/`-separated segments in a well-formed ref.
const REF_SEGMENTS: usize = 4;

/// Identity of one distributable unit, decomposed from its ref string.
///
/// A well-formed ref has exactly four segments, `kind/id/arch/branch`
/// (e.g. `app/org.gnome.Recipes/x86_64/stable`). Any other segment count is
/// parse-indeterminate rather than an error: `id`, `arch`, and `branch`
/// each fall back to the full raw ref string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RefIdentity {
    /// The raw slash-separated ref string.
    pub r#ref: String,
    /// Application or runtime identifier (second segment).
    pub id: String,
    /// CPU architecture (third segment).
    pub arch: String,
    /// Branch name (fourth segment).
    pub branch: String,
}

impl RefIdentity {
    /// Decompose a raw ref string into its identity fields.
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split('/').collect();
        if segments.len() == REF_SEGMENTS {
            Self {
                r#ref: raw.to_string(),
                id: segments[1].to_string(),
                arch: segments[2].to_string(),
                branch: segments[3].to_string(),
            }
        } else {
            Self {
                r#ref: raw.to_string(),
                id: raw.to_string(),
                arch: raw.to_string(),
                branch: raw.to_string(),
            }
        }
    }
}

/// Everything the remote publishes about one ref.
///
/// The quick listing fills identity, `short_commit`, and the size columns;
/// the verbose remote-info report fills the rest, including the commit
/// history chain; the lookup service attaches `metadata` afterwards.
///
/// `history` is ordered newest-first and excludes the record itself. The
/// entries of a chain are shared: entry *i*'s own `history` holds `Arc`
/// clones of the strict suffix *i+1..*, never deep copies, so an n-entry
/// chain stores n records in aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RefRemoteInfo {
    #[serde(flatten)]
    pub identity: RefIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_commit: Option<String>,
    /// Human-readable size as emitted by the tool, e.g. `4,2 MB`. Opaque;
    /// no unit normalization is attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk: Option<String>,
    pub end_of_life: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_life_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_life_rebase: Option<String>,
    /// Raw metadata blob, attached post-hoc by the lookup service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Prior commits of this ref, newest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<Arc<RefRemoteInfo>>,
}

impl RefRemoteInfo {
    /// An empty record for the given ref, identity decomposed per
    /// [`RefIdentity::parse`]. `end_of_life` starts out false.
    pub fn for_ref(raw: &str) -> Self {
        Self {
            identity: RefIdentity::parse(raw),
            ..Self::default()
        }
    }
}
