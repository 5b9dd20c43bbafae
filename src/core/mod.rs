//! # Core Module
//!
//! The renaming engine, independent of how results are displayed.
//!
//! ## Modules
//! - `input` - Parses the `--dir=<path>` argument and asks for confirmation
//! - `scanner` - Walks the directory tree
//! - `metadata` - Decodes embedded EXIF metadata
//! - `date` - Resolves each photo's capture date
//! - `rename` - Builds new names and renames files
//! - `pipeline` - Ties the stages together

pub mod date;
pub mod input;
pub mod metadata;
pub mod pipeline;
pub mod rename;
pub mod scanner;

// Re-export commonly used types
pub use date::{DateResolution, DateResolver};
pub use input::DirectoryArgument;
pub use metadata::{ExifDecoder, MetadataDecoder};
pub use pipeline::Pipeline;
pub use rename::{DateIndexCounter, RenameOutcome, Renamer};
pub use scanner::FileRecord;
