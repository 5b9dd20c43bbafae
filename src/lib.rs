//! # Frog Album
//!
//! Renames every photo under a directory after the day it was taken.
//!
//! ## Naming
//! Files become `FROG_<YYYYMMDD>_<n>.<suffix>`, where the date comes from
//! the EXIF `Date/Time` tag of JPEGs or, failing that, from the file's
//! modification time, and `n` counts photos of the same day in visiting
//! order. Files stay in their own directory.
//!
//! ## Architecture
//! - `core` - The rename engine (walk, date, rename)
//! - `events` - Progress reporting from the engine to the output layer
//! - `error` - Error types

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{FrogAlbumError, Result};

/// Initialize tracing for the library
///
/// Filtering follows `RUST_LOG`. Diagnostics go to stderr so they never
/// mix with the per-file result lines on stdout.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
