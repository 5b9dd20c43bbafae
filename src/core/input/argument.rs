//! `--key=value` argument parsing and directory validation.

use crate::error::{ArgumentError, DirectoryError};
use std::path::{Path, PathBuf};

/// A single `--key=value` command-line token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Parse a `--key=value` token.
///
/// The key must be non-empty. The value is returned exactly as given.
/// Any key is accepted, `--dir` is only the documented spelling.
pub fn parse_argument(content: &str) -> Result<KeyValue, ArgumentError> {
    let rest = content
        .strip_prefix("--")
        .ok_or_else(|| ArgumentError::Format {
            content: content.to_string(),
        })?;

    match rest.find('=') {
        Some(pos) if pos >= 1 => Ok(KeyValue {
            key: rest[..pos].to_string(),
            value: rest[pos + 1..].to_string(),
        }),
        _ => Err(ArgumentError::Format {
            content: rest.to_string(),
        }),
    }
}

/// A path checked to exist and to be a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryArgument {
    path: PathBuf,
}

impl DirectoryArgument {
    /// Validate that `path` exists and is a directory
    pub fn validate(path: impl Into<PathBuf>) -> Result<Self, DirectoryError> {
        let path = path.into();
        if !path.exists() {
            return Err(DirectoryError::NotFound { path });
        }
        if !path.is_dir() {
            return Err(DirectoryError::NotADirectory { path });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
