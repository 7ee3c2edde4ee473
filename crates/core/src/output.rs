//! Workflow command output.
//!
//! The Actions runtime scans stdout for `::set-output` workflow commands and
//! captures them as output variables. The line format is a fixed
//! compatibility contract and must not change.

use std::fmt;
use std::io::Write;

use crate::error::{Error, Result};

/// A single key/value workflow command.
///
/// Rendered as `::set-output name=<key>::<message>`. No escaping is
/// performed; key and message must not contain newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    key: String,
    message: String,
}

impl OutputRecord {
    /// Creates a record associating `message` with the output variable `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Writes the record as one line to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if the write fails. There is no retry; a
    /// broken output stream is a process-level fault.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{self}").map_err(|source| Error::Output { source })
    }
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::set-output name={}::{}", self.key, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_workflow_command_format() {
        let record = OutputRecord::new("sampleOutput", "dry run was true");
        assert_eq!(
            record.to_string(),
            "::set-output name=sampleOutput::dry run was true"
        );
    }

    #[test]
    fn emit_appends_single_newline() {
        let record = OutputRecord::new("key", "message");
        let mut out = Vec::new();
        record.emit(&mut out).unwrap();
        assert_eq!(out, b"::set-output name=key::message\n");
    }

    #[test]
    fn message_is_not_escaped() {
        // The contract performs no escaping, even for characters that collide
        // with the command syntax.
        let record = OutputRecord::new("k", "a::b=c");
        assert_eq!(record.to_string(), "::set-output name=k::a::b=c");
    }

    #[test]
    fn emit_propagates_write_failures() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let record = OutputRecord::new("k", "m");
        let err = record.emit(&mut FailingWriter).unwrap_err();
        assert!(matches!(err, Error::Output { .. }));
    }
}
