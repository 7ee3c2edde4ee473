//! CLI argument parsing, exit codes, and error rendering.

use clap::Parser;
use miette::Report;
use sample_action_core::Error;
use std::io::{self, Write};

/// Exit code for successful completion
pub const EXIT_OK: i32 = 0;
/// CLI or configuration error exit code
pub const EXIT_CLI: i32 = 2;
/// Output stream I/O fault exit code
pub const EXIT_IO: i32 = 3;

/// Command-line arguments.
///
/// `--sample` defaults to the empty string on purpose: required-ness is a
/// post-parse validation (see `ActionConfig::new`), so the parser itself
/// never terminates the process over a missing value.
#[derive(Parser, Debug)]
#[command(
    name = "sample-action",
    version,
    about = "Sample GitHub Action entry point"
)]
pub struct Cli {
    /// Some sample input.
    #[arg(
        long,
        value_name = "STRING",
        default_value = "",
        help = "some sample input"
    )]
    pub sample: String,
}

/// Parse CLI arguments from the process argument vector.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Map an error to its process exit code.
#[must_use]
pub const fn exit_code_for(err: &Error) -> i32 {
    match err {
        Error::EmptySample => EXIT_CLI,
        Error::Output { .. } => EXIT_IO,
    }
}

/// Render an error as a human-friendly report on stderr.
#[allow(clippy::print_stderr)]
pub fn render_error(err: Error) {
    // Use miette for human-friendly error display
    let report = Report::new(err);
    eprintln!("{report:?}");
    // Ensure output is flushed before potential process exit
    let _ = io::stderr().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_defaults_to_empty() {
        let cli = Cli::try_parse_from(["sample-action"]).unwrap();
        assert_eq!(cli.sample, "");
    }

    #[test]
    fn sample_accepts_both_flag_styles() {
        let cli = Cli::try_parse_from(["sample-action", "--sample", "foo"]).unwrap();
        assert_eq!(cli.sample, "foo");

        let cli = Cli::try_parse_from(["sample-action", "--sample=bar"]).unwrap();
        assert_eq!(cli.sample, "bar");
    }

    #[test]
    fn no_short_form_exists() {
        assert!(Cli::try_parse_from(["sample-action", "-s", "foo"]).is_err());
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["sample-action", "--other"]).is_err());
    }

    #[test]
    fn exit_codes_map_by_error_kind() {
        assert_eq!(exit_code_for(&Error::EmptySample), EXIT_CLI);
        let io_err = Error::Output {
            source: std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        };
        assert_eq!(exit_code_for(&io_err), EXIT_IO);
    }
}
