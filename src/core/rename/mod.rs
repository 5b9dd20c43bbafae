//! # Rename Module
//!
//! Turns a dated file into `FROG_<YYYYMMDD>_<n>.<suffix>` in place.
//!
//! ## Sequence Numbers
//! `n` comes from a [`DateIndexCounter`] owned by the [`Renamer`]. It starts
//! at 1 for each day and is shared across suffixes, so a `.jpg` and a `.png`
//! taken the same day get 1 and 2. Counters live for one run only:
//! re-running over renamed files starts from 1 again and may hand out
//! different numbers if the visiting order changed.

mod counter;
mod executor;
mod naming;

pub use counter::DateIndexCounter;
pub use executor::{RenameConfig, RenameOutcome, Renamer};
pub use naming::{date_key, new_file_name, DATE_KEY_FORMAT, DEFAULT_PREFIX};
