//! # Input Module
//!
//! Everything the run needs from the user before touching the filesystem:
//! the `--dir=<path>` argument and a `yes` confirmation.

mod argument;
mod confirm;

pub use argument::{parse_argument, DirectoryArgument, KeyValue};
pub use confirm::{confirm, read_token, CONFIRM_PROMPT, CONFIRM_TOKEN};
