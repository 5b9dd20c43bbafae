//! # Error Module
//!
//! Error types for the photo renamer.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Startup errors are fatal**, per-file errors are reported and skipped

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum FrogAlbumError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Failed to read confirmation: {0}")]
    Confirmation(#[source] std::io::Error),
}

/// Malformed command-line argument
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("no album directory, like : --dir=xxx")]
    Missing,

    #[error("argument format not right : {content}")]
    Format { content: String },
}

/// Target directory failed validation
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{path} is not exist.")]
    NotFound { path: PathBuf },

    #[error("{path} is not directory")]
    NotADirectory { path: PathBuf },
}

/// Errors raised while decoding embedded metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode metadata of {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// Errors raised while resolving a capture date
#[derive(Error, Debug)]
pub enum DateError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Unparseable date \"{value}\" in {path}: {source}")]
    Parse {
        path: PathBuf,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to read modification time of {path}: {source}")]
    Modified {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A filesystem rename that did not go through
#[derive(Error, Debug)]
#[error("Failed to rename {from} to {to}: {source}")]
pub struct RenameError {
    pub from: PathBuf,
    pub to: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, FrogAlbumError>;
