//! New file name construction.

use chrono::NaiveDateTime;
use std::ffi::{OsStr, OsString};

/// Grouping key layout
pub const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// Default name prefix
pub const DEFAULT_PREFIX: &str = "FROG";

/// `YYYYMMDD` key grouping files by day
pub fn date_key(date: &NaiveDateTime) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// `<prefix>_<key>_<index>.<suffix>`
///
/// The suffix bytes are kept verbatim, so a file without one ends in a bare `.`.
pub fn new_file_name(prefix: &str, key: &str, index: u32, suffix: &OsStr) -> OsString {
    let mut name = OsString::from(format!("{}_{}_{}.", prefix, key, index));
    name.push(suffix);
    name
}
