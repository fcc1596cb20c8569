//! Parsing of one quick-listing line.
//!
//! `remote-ls` emits one ref per line with tab-separated columns
//! `ref`, `commit`, `installed-size`, `download-size` and an optional
//! `options` column. Header lines, blank lines, and anything else without
//! enough columns are silently dropped rather than treated as errors.

use crate::model::RefRemoteInfo;

/// Marker carried in the options column of a deprecated ref.
const EOL_OPTION_PREFIX: &str = "eol=";

/// Parse one tabulated listing line into a basic record, or `None` when the
/// line does not have more than three columns.
pub fn parse_listing_line(line: &str) -> Option<RefRemoteInfo> {
    // The tool pads some rows with a doubled separator; collapse it before
    // splitting.
    let collapsed = line.trim().replace("\t\t", "\t");
    let columns: Vec<&str> = collapsed.split('\t').collect();

    if columns.len() <= 3 {
        return None;
    }

    let mut info = RefRemoteInfo::for_ref(columns[0]);
    info.short_commit = Some(columns[1].to_string());
    info.installed_size = Some(columns[2].to_string());
    info.download_size = Some(columns[3].to_string());

    match columns.get(4).and_then(|o| o.strip_prefix(EOL_OPTION_PREFIX)) {
        Some(message) => {
            info.end_of_life_message = Some(message.to_string());
            info.end_of_life = true;
        }
        None => {
            info.end_of_life = false;
        }
    }

    Some(info)
}
