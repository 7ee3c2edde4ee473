//! The single execution path of the action.

use std::io::Write;

use sample_action_core::{ActionConfig, DryRun, Error, OutputRecord, Result};

/// Output variable name the Actions runtime associates the message with.
pub const OUTPUT_KEY: &str = "sampleOutput";

/// Runs the action: echo the sample, branch on dry-run mode, emit the record.
///
/// The writer is passed explicitly so tests can assert the exact bytes.
/// Output is exactly two lines, in a fixed order:
///
/// ```text
/// sample was "<sample>"
/// ::set-output name=sampleOutput::<message>
/// ```
///
/// # Errors
///
/// Returns [`Error::Output`] if a write to `out` fails.
pub fn run<W: Write>(config: &ActionConfig, dry_run: DryRun, out: &mut W) -> Result<()> {
    writeln!(out, "sample was {:?}", config.sample())
        .map_err(|source| Error::Output { source })?;

    OutputRecord::new(OUTPUT_KEY, dry_run.message()).emit(out)
}
