//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the rename pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Directory walk events
    Walk(WalkEvent),
    /// Per-file rename events
    Rename(RenameEvent),
    /// Pipeline-level events
    Pipeline(PipelineEvent),
}

/// Events during the directory walk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WalkEvent {
    /// Walking has started at the given root
    Started { root: PathBuf },
    /// A directory could not be listed and was skipped
    DirectorySkipped { path: PathBuf, message: String },
    /// Walking completed
    Completed { files_visited: usize },
}

/// Where a resolved capture date came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSource {
    /// Embedded EXIF date/time tag
    Embedded,
    /// Filesystem last-modified time
    Modified,
}

/// Events for each visited file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenameEvent {
    /// The file was renamed
    Renamed {
        path: PathBuf,
        original_name: String,
        new_name: String,
        source: DateSource,
    },
    /// The rename call itself failed
    Failed {
        path: PathBuf,
        original_name: String,
        message: String,
    },
    /// No capture date could be resolved, the file was left alone
    DateUnavailable {
        path: PathBuf,
        original_name: String,
        message: String,
    },
}

/// Pipeline-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// Pipeline has started
    Started { root: PathBuf },
    /// Pipeline completed
    Completed { summary: RenameSummary },
}

/// Summary of a rename run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameSummary {
    /// Files handed to the renamer
    pub files_visited: usize,
    /// Files successfully renamed
    pub renamed: usize,
    /// Files whose rename call failed
    pub failed: usize,
    /// Files skipped because no date could be resolved
    pub date_unavailable: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl std::fmt::Display for DateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateSource::Embedded => write!(f, "exif"),
            DateSource::Modified => write!(f, "mtime"),
        }
    }
}
