//! Parsers for the textual flatpak output contract
//!
//! The external tool speaks three formats and this module understands two of
//! them (the metadata blob is passed through opaque):
//!
//! - Quick listing (listing.rs) - one tab-separated line per ref
//! - Verbose report (detail.rs) - `Label: value` lines, optionally followed
//!   by a history block
//! - History block (history.rs) - repeating Commit/Subject/Date triplets
//!   embedded in the verbose report
//!
//! The formats are treated as a fixed, versioned wire contract: unknown
//! labels are skipped for forward compatibility, but the recognized labels
//! and the date pattern are matched exactly.

pub mod detail;
pub mod history;
pub mod listing;

pub use detail::parse_remote_info;
pub use history::parse_history;
pub use listing::parse_listing_line;
