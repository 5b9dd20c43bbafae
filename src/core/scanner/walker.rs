//! Directory walking implementation using walkdir.

use super::FileRecord;
use crate::events::{Event, EventSender, WalkEvent};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Configuration for the directory walker
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Whether to descend into symlinked directories
    pub follow_symlinks: bool,
}

/// Depth-first walker over a directory tree
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    /// Create a new walker with the given configuration
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Lazily walk `root`, yielding every non-directory entry.
    ///
    /// Sorting makes walkdir read each directory completely before yielding
    /// from it, which is what keeps renames made by the consumer from
    /// showing up again later in the same listing.
    pub fn walk<'a>(&self, root: &Path, events: &'a EventSender) -> Walk<'a> {
        events.send(Event::Walk(WalkEvent::Started {
            root: root.to_path_buf(),
        }));

        let inner = WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter();

        Walk { inner, events }
    }
}

/// Iterator returned by [`DirectoryWalker::walk`]
pub struct Walk<'a> {
    inner: walkdir::IntoIter,
    events: &'a EventSender,
}

impl Iterator for Walk<'_> {
    type Item = FileRecord;

    fn next(&mut self) -> Option<FileRecord> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        continue;
                    }
                    return Some(FileRecord::new(entry.into_path()));
                }
                Err(e) => {
                    // Unlistable subtrees are treated like empty ones
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(PathBuf::new);
                    debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                    self.events.send(Event::Walk(WalkEvent::DirectorySkipped {
                        path,
                        message: e.to_string(),
                    }));
                }
            }
        }
    }
}
