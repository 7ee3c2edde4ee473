//! Dry-run mode selection.

use std::env;

use tracing::debug;

/// Name of the environment variable that selects dry-run mode.
pub const DRY_RUN_VAR: &str = "DRY_RUN";

/// Dry-run mode, selected via the [`DRY_RUN_VAR`] environment variable.
///
/// Only the exact literal `"true"` enables it; an absent variable or any
/// other value (including `"True"` and `"1"`) is [`DryRun::Disabled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DryRun {
    /// `DRY_RUN=true` was set in the environment
    Enabled,
    /// `DRY_RUN` was unset or held any other value
    Disabled,
}

impl DryRun {
    /// Reads [`DRY_RUN_VAR`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let mode = match env::var(DRY_RUN_VAR) {
            Ok(value) if value == "true" => Self::Enabled,
            _ => Self::Disabled,
        };
        debug!(dry_run = mode.is_enabled(), "selected output branch");
        mode
    }

    /// Check if dry-run mode is enabled.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// The message reported for this mode in the output record.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Enabled => "dry run was true",
            Self::Disabled => "env var DRY_RUN was false or not specified",
        }
    }
}
