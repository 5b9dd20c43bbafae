//! # Scanner Module
//!
//! Walks a directory tree and hands every non-directory entry to the renamer.
//!
//! ## Ordering
//! Depth-first, entries sorted by file name inside each directory. Each
//! directory is listed in full before any of its entries is yielded, so
//! files renamed during the walk are never visited twice.
//!
//! ## Example
//! ```rust,ignore
//! use frog_album::core::scanner::{DirectoryWalker, WalkConfig};
//!
//! let walker = DirectoryWalker::new(WalkConfig::default());
//! for record in walker.walk(Path::new("/Users/photos"), &null_sender()) {
//!     println!("{}", record.file_name);
//! }
//! ```

mod walker;

pub use walker::{DirectoryWalker, Walk, WalkConfig};

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// One visited file, before its date is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path to the file as found by the walk
    pub path: PathBuf,
    /// Final path component, lossily decoded for logs and events
    pub file_name: String,
    /// Raw text after the last `.` of the file name, empty if there is none
    pub suffix: OsString,
}

impl FileRecord {
    pub fn new(path: PathBuf) -> Self {
        let raw_name = path.file_name().unwrap_or_default();
        let file_name = raw_name.to_string_lossy().into_owned();
        let suffix = suffix_of(raw_name);
        Self {
            path,
            file_name,
            suffix,
        }
    }

    /// Directory holding the file
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }
}

/// Bytes after the last `.` in `name`, or empty when there is no dot.
///
/// Unlike `Path::extension`, a leading dot counts: `.hidden` has suffix
/// `hidden`, and `photo.` has an empty suffix. The bytes are not decoded.
pub fn suffix_of(name: &OsStr) -> OsString {
    // With a character in front, a leading dot is no longer special
    let mut padded = OsString::from("_");
    padded.push(name);
    Path::new(&padded)
        .extension()
        .map(OsStr::to_os_string)
        .unwrap_or_default()
}
