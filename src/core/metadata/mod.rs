//! # Metadata Module
//!
//! Decodes embedded EXIF metadata into named directories of named tags.
//!
//! ## Directories
//! Fields are grouped the way photo tools usually present them:
//! - `Exif IFD0` - primary image header (Make, Model, Date/Time, ...)
//! - `Exif SubIFD` - capture details (Date/Time Original, exposure, ...)
//! - `GPS`, `Interoperability`, `Exif Thumbnail`
//!
//! The resolver only ever looks tags up by directory and tag name, so any
//! [`MetadataDecoder`] producing the same shape can stand in for EXIF.

use crate::error::MetadataError;
use exif::{Context, Exif, Field, In, Reader, Tag, Value};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Name of the primary image header directory
pub const EXIF_IFD0: &str = "Exif IFD0";

/// A single decoded tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataTag {
    /// Human-readable tag name, e.g. "Date/Time"
    pub name: String,
    /// Textual value of the tag
    pub description: String,
}

/// A named group of tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDirectory {
    pub name: String,
    pub tags: Vec<MetadataTag>,
}

impl MetadataDirectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
        }
    }

    /// Builder-style tag insertion
    pub fn with_tag(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.tags.push(MetadataTag {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// First tag whose name matches, ignoring case
    pub fn tag(&self, name: &str) -> Option<&MetadataTag> {
        self.tags.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

/// Look up `tag` inside the first directory named exactly `directory`
pub fn find_tag<'a>(
    directories: &'a [MetadataDirectory],
    directory: &str,
    tag: &str,
) -> Option<&'a MetadataTag> {
    directories
        .iter()
        .filter(|d| d.name == directory)
        .find_map(|d| d.tag(tag))
}

/// Anything able to turn a file into metadata directories
///
/// Returning an empty list means the file carries no embedded metadata.
/// Errors are reserved for files that could not be read or parsed.
pub trait MetadataDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<Vec<MetadataDirectory>, MetadataError>;
}

/// EXIF decoder backed by kamadak-exif
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifDecoder;

impl MetadataDecoder for ExifDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<MetadataDirectory>, MetadataError> {
        let file = File::open(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut bufreader = BufReader::new(&file);
        let exif = match Reader::new().read_from_container(&mut bufreader) {
            Ok(exif) => exif,
            // A well-formed image without an EXIF block
            Err(exif::Error::NotFound(_)) => return Ok(Vec::new()),
            Err(exif::Error::Io(source)) => {
                return Err(MetadataError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
            Err(e) => {
                return Err(MetadataError::Decode {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        Ok(group_fields(&exif))
    }
}

/// Group EXIF fields into directories, keeping first-seen order
fn group_fields(exif: &Exif) -> Vec<MetadataDirectory> {
    let mut directories: Vec<MetadataDirectory> = Vec::new();

    for field in exif.fields() {
        let name = directory_name(field.ifd_num, field.tag.context());
        let tag = MetadataTag {
            name: tag_name(field.tag),
            description: describe(field, exif),
        };

        match directories.iter_mut().find(|d| d.name == name) {
            Some(directory) => directory.tags.push(tag),
            None => directories.push(MetadataDirectory {
                name,
                tags: vec![tag],
            }),
        }
    }

    directories
}

fn directory_name(ifd: In, context: Context) -> String {
    match (ifd, context) {
        (In::PRIMARY, Context::Tiff) => EXIF_IFD0.to_string(),
        (In::THUMBNAIL, Context::Tiff) => "Exif Thumbnail".to_string(),
        (_, Context::Exif) => "Exif SubIFD".to_string(),
        (_, Context::Gps) => "GPS".to_string(),
        (_, Context::Interop) => "Interoperability".to_string(),
        (ifd, _) => format!("Exif IFD{}", ifd.index()),
    }
}

/// Conventional display names for the date tags, falling back to the
/// EXIF tag name
fn tag_name(tag: Tag) -> String {
    match tag {
        Tag::DateTime => "Date/Time".to_string(),
        Tag::DateTimeOriginal => "Date/Time Original".to_string(),
        Tag::DateTimeDigitized => "Date/Time Digitized".to_string(),
        other => other.to_string(),
    }
}

/// Raw text for ASCII fields, formatted value for everything else.
///
/// kamadak-exif reformats date tags for display, so ASCII values are read
/// straight from the field to keep the `YYYY:MM:DD HH:MM:SS` layout.
fn describe(field: &Field, exif: &Exif) -> String {
    if let Value::Ascii(ref vec) = field.value {
        if let Some(bytes) = vec.first() {
            return String::from_utf8_lossy(bytes)
                .trim_end_matches('\0')
                .trim()
                .to_string();
        }
    }
    field.display_value().with_unit(exif).to_string()
}
