//! # CLI Module
//!
//! Command-line interface for the photo renamer.
//!
//! ## Usage
//! ```bash
//! # Rename every photo under ~/Photos, after answering "yes"
//! frog-album --dir=~/Photos
//!
//! # More detail on where each date came from
//! RUST_LOG=frog_album=debug frog-album --dir=~/Photos
//! ```

use clap::Parser;
use console::{style, Term};
use frog_album::core::input::{confirm, parse_argument, DirectoryArgument, CONFIRM_PROMPT};
use frog_album::core::pipeline::Pipeline;
use frog_album::error::{ArgumentError, FrogAlbumError, Result};
use frog_album::events::{Event, EventChannel, RenameEvent, RenameSummary};
use std::ffi::OsString;
use std::io;
use std::thread;

/// Frog Album - Rename photos by the day they were taken
#[derive(Parser, Debug)]
#[command(name = "frog-album")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Album directory, given as --dir=<path>
    #[arg(
        value_name = "--dir=PATH",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    arguments: Vec<String>,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse_from(escape_separator(std::env::args_os().collect()));
    let out = Term::stdout();

    out.write_line("album rename program start").ok();

    // Only the first argument is consulted
    let argument = cli.arguments.first().ok_or(ArgumentError::Missing)?;
    out.write_line(&format!("scan dir : {}", argument)).ok();
    let directory = parse_argument(argument)?.value;

    out.write_str(CONFIRM_PROMPT).ok();
    out.flush().ok();
    let confirmed = confirm(&mut io::stdin().lock()).map_err(FrogAlbumError::Confirmation)?;
    if !confirmed {
        out.write_line("no picture was rename, program exit.").ok();
        return Ok(());
    }

    let root = DirectoryArgument::validate(directory)?;
    let pipeline = Pipeline::builder().build();

    let (sender, receiver) = EventChannel::new();

    // Print results in a separate thread while the walk runs here
    let event_thread = thread::spawn(move || {
        let out = Term::stdout();
        let err = Term::stderr();
        for event in receiver.iter() {
            print_event(&out, &err, &event);
        }
    });

    let summary = pipeline.run_with_events(&root, &sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();

    print_summary(&out, &summary);
    out.write_line("album rename program end").ok();

    Ok(())
}

/// Keep a leading `--` as the album argument instead of letting clap eat it.
///
/// The first argument is parsed as `--key=value` no matter what it is, so a
/// bare `--` must reach the parser and be rejected there.
fn escape_separator(mut args: Vec<OsString>) -> Vec<OsString> {
    if args.get(1).is_some_and(|arg| arg == "--") {
        args.insert(1, OsString::from("--"));
    }
    args
}

fn print_event(out: &Term, err: &Term, event: &Event) {
    let Event::Rename(event) = event else {
        return;
    };

    match event {
        RenameEvent::Renamed {
            original_name,
            new_name,
            source,
            ..
        } => {
            out.write_line(&format!(
                "success for {} {}",
                original_name,
                style(format!("→ {} ({})", new_name, source)).dim()
            ))
            .ok();
        }
        RenameEvent::Failed {
            original_name,
            message,
            ..
        } => {
            err.write_line(&style(message).red().to_string()).ok();
            out.write_line(&format!("rename fail for {}", original_name))
                .ok();
        }
        RenameEvent::DateUnavailable {
            original_name,
            message,
            ..
        } => {
            err.write_line(&style(message).red().to_string()).ok();
            out.write_line(&format!("get date fail for {}", original_name))
                .ok();
        }
    }
}

fn print_summary(out: &Term, summary: &RenameSummary) {
    out.write_line(&format!(
        "{} {} of {} files renamed in {:.1}s",
        style("✓").green().bold(),
        style(summary.renamed).cyan(),
        summary.files_visited,
        summary.duration_ms as f64 / 1000.0
    ))
    .ok();

    if summary.failed > 0 {
        out.write_line(&format!(
            "  {} renames failed",
            style(summary.failed).red()
        ))
        .ok();
    }

    if summary.date_unavailable > 0 {
        out.write_line(&format!(
            "  {} files without a usable date",
            style(summary.date_unavailable).yellow()
        ))
        .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Vec<String> {
        let args = args.iter().map(OsString::from).collect();
        Cli::parse_from(escape_separator(args)).arguments
    }

    #[test]
    fn dir_argument_is_taken_as_is() {
        assert_eq!(parse(&["frog-album", "--dir=/photos"]), vec!["--dir=/photos"]);
    }

    #[test]
    fn no_arguments() {
        assert!(parse(&["frog-album"]).is_empty());
    }

    #[test]
    fn bare_separator_is_the_first_argument() {
        assert_eq!(parse(&["frog-album", "--"]), vec!["--"]);
        assert_eq!(
            parse(&["frog-album", "--", "--dir=/photos"]),
            vec!["--", "--dir=/photos"]
        );
    }
}
