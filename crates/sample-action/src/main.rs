//! sample-action binary entry point.
//!
//! Linear execution: parse flags, validate, echo the sample, branch on
//! `DRY_RUN`, emit the output record, exit. The only fatal path is an empty
//! `--sample`.

// The two-line stdout contract is this binary's whole purpose
#![allow(clippy::print_stdout, clippy::print_stderr)]

use sample_action::cli::{self, EXIT_OK};
use sample_action::{action, tracing};
use sample_action_core::{ActionConfig, DryRun};

fn main() {
    let cli = cli::parse();

    // Ignore error if tracing is already initialized (e.g., in tests)
    let _ = tracing::init_tracing(tracing::TracingConfig::default());

    std::process::exit(run(cli));
}

/// Run the action and map any error to its exit code.
fn run(cli: cli::Cli) -> i32 {
    // Validation fires before anything is written to stdout.
    let config = match ActionConfig::new(cli.sample) {
        Ok(config) => config,
        Err(err) => {
            let code = cli::exit_code_for(&err);
            cli::render_error(err);
            return code;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match action::run(&config, DryRun::from_env(), &mut stdout) {
        Ok(()) => EXIT_OK,
        Err(err) => {
            let code = cli::exit_code_for(&err);
            cli::render_error(err);
            code
        }
    }
}
