//! Core types for the sample GitHub Action.
//!
//! This crate carries everything below the CLI surface:
//!
//! - [`ActionConfig`] - validated per-invocation configuration
//! - [`DryRun`] - the branch selected by the `DRY_RUN` environment variable
//! - [`OutputRecord`] - a workflow command the Actions runtime captures as an
//!   output variable
//! - [`Error`] - the crate error type

pub mod config;
pub mod dry_run;
pub mod error;
pub mod output;

pub use config::ActionConfig;
pub use dry_run::DryRun;
pub use error::{Error, Result};
pub use output::OutputRecord;
