//! # Pipeline Module
//!
//! Runs the whole rename over one directory.
//!
//! ## Pipeline Stages
//! 1. **Walk** - Visit every file under the directory, depth-first
//! 2. **Date** - Resolve each file's capture date (EXIF, then mtime)
//! 3. **Rename** - Give it the next `FROG_<day>_<n>` name for that day
//!
//! Stages are interleaved file by file on the calling thread.

mod executor;

pub use executor::{Pipeline, PipelineBuilder, PipelineConfig};
