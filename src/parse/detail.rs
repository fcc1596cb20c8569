//! Parsing of the verbose `remote-info --log` report.
//!
//! The report is a sequence of `Label: value` lines. Some fields have two
//! label spellings: the tool has emitted both `Collection ID:` and
//! `Collection:`, `Download size:` and `Download:`, `Installed size:` and
//! `Installed:` across versions, each pair filling the same field. The
//! longer spelling of a pair is matched before its shorter sibling.
//!
//! A `History:` line hands the rest of the report to the history parser;
//! nothing after that marker is interpreted as a top-level label.

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::model::RefRemoteInfo;
use crate::parse::history::parse_history;

pub(crate) const LABEL_COMMIT: &str = "Commit:";
pub(crate) const LABEL_SUBJECT: &str = "Subject:";
pub(crate) const LABEL_DATE: &str = "Date:";

const LABEL_REF: &str = "Ref:";
const LABEL_ID: &str = "ID:";
const LABEL_ARCH: &str = "Arch:";
const LABEL_BRANCH: &str = "Branch:";
const LABEL_COLLECTION_ID: &str = "Collection ID:";
const LABEL_COLLECTION: &str = "Collection:";
const LABEL_PARENT: &str = "Parent:";
const LABEL_DOWNLOAD_SIZE: &str = "Download size:";
const LABEL_DOWNLOAD: &str = "Download:";
const LABEL_INSTALLED_SIZE: &str = "Installed size:";
const LABEL_INSTALLED: &str = "Installed:";
const LABEL_RUNTIME: &str = "Runtime:";
const LABEL_SDK: &str = "Sdk:";
const LABEL_EOL: &str = "End-of-life:";
const LABEL_EOL_REBASE: &str = "End-of-life-rebase:";
const LABEL_HISTORY: &str = "History:";

/// The fixed date pattern of the report, e.g. `2018-01-23 10:23:30 +0000`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Parse a verbose report into a full record.
///
/// Unrecognized lines are skipped so newer tool versions with extra fields
/// keep parsing. A malformed `Date:` value anywhere in the report (history
/// entries included) fails the whole call; no partial record is returned.
pub fn parse_remote_info(text: &str) -> Result<RefRemoteInfo> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // `end_of_life` starts out false and only an End-of-life label flips it.
    let mut info = RefRemoteInfo::default();

    for (index, line) in lines.iter().enumerate() {
        if let Some(value) = strip(line, LABEL_REF) {
            info.identity.r#ref = value;
        } else if let Some(value) = strip(line, LABEL_ID) {
            info.identity.id = value;
        } else if let Some(value) = strip(line, LABEL_ARCH) {
            info.identity.arch = value;
        } else if let Some(value) = strip(line, LABEL_BRANCH) {
            info.identity.branch = value;
        } else if let Some(value) = strip(line, LABEL_COLLECTION_ID) {
            info.collection_id = Some(value);
        } else if let Some(value) = strip(line, LABEL_COLLECTION) {
            info.collection_id = Some(value);
        } else if let Some(value) = strip(line, LABEL_DATE) {
            info.date = Some(parse_date(&value)?);
        } else if let Some(value) = strip(line, LABEL_SUBJECT) {
            info.subject = Some(value);
        } else if let Some(value) = strip(line, LABEL_COMMIT) {
            info.commit = Some(value);
        } else if let Some(value) = strip(line, LABEL_PARENT) {
            info.parent_commit = Some(value);
        } else if let Some(value) = strip(line, LABEL_DOWNLOAD_SIZE) {
            info.download_size = Some(value);
        } else if let Some(value) = strip(line, LABEL_DOWNLOAD) {
            info.download_size = Some(value);
        } else if let Some(value) = strip(line, LABEL_INSTALLED_SIZE) {
            info.installed_size = Some(value);
        } else if let Some(value) = strip(line, LABEL_INSTALLED) {
            info.installed_size = Some(value);
        } else if let Some(value) = strip(line, LABEL_RUNTIME) {
            info.runtime = Some(value);
        } else if let Some(value) = strip(line, LABEL_SDK) {
            info.sdk = Some(value);
        } else if let Some(value) = strip(line, LABEL_EOL) {
            info.end_of_life_message = Some(value);
            info.end_of_life = true;
        } else if let Some(value) = strip(line, LABEL_EOL_REBASE) {
            info.end_of_life_rebase = Some(value);
        } else if line.starts_with(LABEL_HISTORY) {
            info.history = parse_history(&info, &lines[index..])?;
            break;
        }
        // Anything else is an unknown label; skipped for forward
        // compatibility.
    }

    Ok(info)
}

/// Parse a date value against the fixed report pattern.
pub(crate) fn parse_date(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, DATE_FORMAT).map_err(|source| Error::DateFormat {
        value: value.to_string(),
        source,
    })
}

fn strip(line: &str, label: &str) -> Option<String> {
    line.strip_prefix(label).map(|rest| rest.trim().to_string())
}
