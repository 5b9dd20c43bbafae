//! Yes/no confirmation before any file is touched.

use std::io::{self, BufRead};

/// The only answer that lets the run proceed
pub const CONFIRM_TOKEN: &str = "yes";

/// Prompt shown before reading the answer
pub const CONFIRM_PROMPT: &str = "are you sure to rename picture? (yes/on):";

/// Read the next whitespace-delimited token, skipping blank lines.
///
/// Returns `None` at end of input.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}

/// Read one token and report whether it is exactly `yes`.
///
/// Case matters: `Yes` and `y` decline, and so does end of input.
pub fn confirm<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    Ok(read_token(reader)?.as_deref() == Some(CONFIRM_TOKEN))
}
