//! # Date Module
//!
//! Works out when a photo was taken.
//!
//! ## Resolution Order
//! 1. For `jpg`/`jpeg` files, the `Date/Time` tag of the `Exif IFD0` directory
//! 2. Otherwise, or when that tag is absent, the file's modification time
//!
//! A tag that is present but unparseable is not papered over with the
//! modification time: the file ends up without a date and is skipped.
//! The same goes for images whose metadata block cannot be decoded.

use crate::core::metadata::{find_tag, ExifDecoder, MetadataDecoder, EXIF_IFD0};
use crate::core::scanner::FileRecord;
use crate::error::DateError;
use crate::events::DateSource;
use chrono::{DateTime, Local, NaiveDateTime};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::debug;

/// EXIF date layout: "YYYY:MM:DD HH:MM:SS"
pub const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Which tag, in which directory, holds the capture date
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Suffixes (compared case-insensitively) worth decoding metadata for
    pub metadata_suffixes: Vec<String>,
    /// Directory holding the date tag
    pub directory: String,
    /// Tag name (compared case-insensitively)
    pub tag: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            metadata_suffixes: vec!["jpg".to_string(), "jpeg".to_string()],
            directory: EXIF_IFD0.to_string(),
            tag: "Date/Time".to_string(),
        }
    }
}

/// Outcome of resolving one file's capture date
#[derive(Debug)]
pub enum DateResolution {
    /// Parsed from the embedded date tag
    Embedded(NaiveDateTime),
    /// Taken from the filesystem modification time
    Modified(NaiveDateTime),
    /// No date could be determined
    Unavailable(DateError),
}

impl DateResolution {
    pub fn date(&self) -> Option<NaiveDateTime> {
        match self {
            DateResolution::Embedded(date) | DateResolution::Modified(date) => Some(*date),
            DateResolution::Unavailable(_) => None,
        }
    }

    pub fn source(&self) -> Option<DateSource> {
        match self {
            DateResolution::Embedded(_) => Some(DateSource::Embedded),
            DateResolution::Modified(_) => Some(DateSource::Modified),
            DateResolution::Unavailable(_) => None,
        }
    }
}

/// Resolves capture dates using a metadata decoder with mtime fallback
pub struct DateResolver {
    config: ResolverConfig,
    decoder: Box<dyn MetadataDecoder>,
}

impl DateResolver {
    pub fn new(config: ResolverConfig, decoder: Box<dyn MetadataDecoder>) -> Self {
        Self { config, decoder }
    }

    /// Resolve the capture date of a single file
    pub fn resolve(&self, record: &FileRecord) -> DateResolution {
        if self.wants_metadata(&record.suffix) {
            match self.embedded_date(&record.path) {
                Ok(Some(date)) => return DateResolution::Embedded(date),
                Ok(None) => {
                    debug!(file = %record.file_name, "no embedded date, using modification time");
                }
                Err(e) => return DateResolution::Unavailable(e),
            }
        }

        match modified_date(&record.path) {
            Ok(date) => DateResolution::Modified(date),
            Err(e) => DateResolution::Unavailable(e),
        }
    }

    fn wants_metadata(&self, suffix: &OsStr) -> bool {
        suffix.to_str().is_some_and(|suffix| {
            self.config
                .metadata_suffixes
                .iter()
                .any(|s| s.eq_ignore_ascii_case(suffix))
        })
    }

    /// `Ok(None)` when the image simply has no date tag
    fn embedded_date(&self, path: &Path) -> Result<Option<NaiveDateTime>, DateError> {
        let directories = self.decoder.decode(path)?;

        let Some(tag) = find_tag(&directories, &self.config.directory, &self.config.tag) else {
            return Ok(None);
        };

        parse_exif_datetime(&tag.description)
            .map(Some)
            .map_err(|source| DateError::Parse {
                path: path.to_path_buf(),
                value: tag.description.clone(),
                source,
            })
    }
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default(), Box::new(ExifDecoder))
    }
}

/// Parse an EXIF date/time string.
///
/// Text after the seconds field (sub-seconds, offsets, padding) is ignored.
pub fn parse_exif_datetime(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_and_remainder(s, EXIF_DATE_FORMAT).map(|(date, _)| date)
}

/// File modification time in local time
pub fn modified_date(path: &Path) -> Result<NaiveDateTime, DateError> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| DateError::Modified {
            path: path.to_path_buf(),
            source,
        })?;
    let datetime: DateTime<Local> = modified.into();
    Ok(datetime.naive_local())
}
