//! # frog-album CLI
//!
//! Renames photos under a directory by capture date.
//!
//! ## Usage
//! ```bash
//! frog-album --dir=/Users/me/Photos
//! ```

mod cli;

use console::{style, Term};
use std::process::ExitCode;

fn main() -> ExitCode {
    frog_album::init_tracing();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Term::stderr()
                .write_line(&style(e).red().to_string())
                .ok();
            ExitCode::FAILURE
        }
    }
}
