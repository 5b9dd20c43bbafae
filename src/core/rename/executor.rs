//! Applies names to files, one at a time.

use super::counter::DateIndexCounter;
use super::naming::{date_key, new_file_name, DEFAULT_PREFIX};
use crate::core::date::DateResolution;
use crate::core::scanner::FileRecord;
use crate::error::RenameError;
use crate::events::{DateSource, Event, EventSender, RenameEvent};
use chrono::NaiveDateTime;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Configuration for naming renamed files
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Leading part of every new name
    pub prefix: String,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Success,
    Failed,
    DateUnavailable,
}

/// Renames files by capture date, owning the per-day counter
pub struct Renamer {
    config: RenameConfig,
    counter: DateIndexCounter,
}

impl Renamer {
    /// Create a renamer with fresh counters
    pub fn new(config: RenameConfig) -> Self {
        Self {
            config,
            counter: DateIndexCounter::new(),
        }
    }

    pub fn counter(&self) -> &DateIndexCounter {
        &self.counter
    }

    /// Name the next file dated `date` would get, consuming a sequence number
    pub fn assign_name(&mut self, record: &FileRecord, date: &NaiveDateTime) -> OsString {
        let key = date_key(date);
        let index = self.counter.next_index(&key);
        new_file_name(&self.config.prefix, &key, index, &record.suffix)
    }

    /// Assign a name and rename the file within its directory.
    ///
    /// The sequence number is spent even if the rename fails. An existing
    /// file at the target is never overwritten.
    pub fn rename(
        &mut self,
        record: &FileRecord,
        date: &NaiveDateTime,
    ) -> Result<PathBuf, RenameError> {
        let target = record.parent().join(self.assign_name(record, date));

        if target == record.path {
            return Ok(target);
        }

        let result = if fs::symlink_metadata(&target).is_ok() {
            Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "target file already exists",
            ))
        } else {
            fs::rename(&record.path, &target)
        };

        match result {
            Ok(()) => Ok(target),
            Err(source) => Err(RenameError {
                from: record.path.clone(),
                to: target,
                source,
            }),
        }
    }

    /// Handle one file end to end and report what happened
    pub fn process(
        &mut self,
        record: &FileRecord,
        resolution: DateResolution,
        events: &EventSender,
    ) -> RenameOutcome {
        let (date, source) = match resolution {
            DateResolution::Embedded(date) => (date, DateSource::Embedded),
            DateResolution::Modified(date) => (date, DateSource::Modified),
            DateResolution::Unavailable(e) => {
                warn!(file = %record.path.display(), error = %e, "could not resolve date");
                events.send(Event::Rename(RenameEvent::DateUnavailable {
                    path: record.path.clone(),
                    original_name: record.file_name.clone(),
                    message: e.to_string(),
                }));
                return RenameOutcome::DateUnavailable;
            }
        };

        match self.rename(record, &date) {
            Ok(target) => {
                let new_name = target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                debug!(file = %record.file_name, new_name = %new_name, %source, "renamed");
                events.send(Event::Rename(RenameEvent::Renamed {
                    path: record.path.clone(),
                    original_name: record.file_name.clone(),
                    new_name,
                    source,
                }));
                RenameOutcome::Success
            }
            Err(e) => {
                warn!(error = %e, "rename failed");
                events.send(Event::Rename(RenameEvent::Failed {
                    path: record.path.clone(),
                    original_name: record.file_name.clone(),
                    message: e.to_string(),
                }));
                RenameOutcome::Failed
            }
        }
    }
}

impl Default for Renamer {
    fn default() -> Self {
        Self::new(RenameConfig::default())
    }
}
