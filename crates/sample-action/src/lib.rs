//! sample-action - a minimal GitHub Actions entry point.
//!
//! The binary has exactly one execution path per invocation: parse and
//! validate `--sample`, echo it, branch on the `DRY_RUN` environment
//! variable, and emit a `::set-output` workflow command. See [`action::run`]
//! for the path and [`cli`] for argument parsing and exit codes.

/// The single execution path of the action.
pub mod action;
/// CLI argument parsing, exit codes, and error rendering.
pub mod cli;
/// Tracing and logging configuration.
pub mod tracing;
