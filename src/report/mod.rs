//! Run-outcome reporting for CI platforms
//!
//! The CI surface is a capability: record a named output string and mark
//! the run failed with a message. The real implementation speaks the
//! workflow-command protocol (an output file named by `GITHUB_OUTPUT`,
//! `::error::` annotations); tests substitute a recording fake.

use crate::error::{Error, Result};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Run-outcome reporting operations consumed by branch-relay
pub trait RunReporter: Send + Sync {
    /// Record a named output string for downstream workflow steps
    fn set_output(&self, name: &str, value: &str) -> Result<()>;

    /// Mark the whole run failed with a human-readable message
    fn set_failed(&self, message: &str) -> Result<()>;
}

/// Reporter speaking the CI workflow-command protocol.
///
/// Outputs append to the file named by the `GITHUB_OUTPUT` environment
/// variable; without one, the legacy `::set-output` command is printed.
/// Failures are annotated with `::error::` - the caller is responsible
/// for the nonzero exit code.
#[derive(Debug, Default)]
pub struct ActionsReporter {
    output_path: Option<PathBuf>,
}

impl ActionsReporter {
    /// Reporter wired to the environment's output file, if declared
    pub fn from_env() -> Self {
        Self {
            output_path: env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }

    /// Reporter writing outputs to an explicit file (used by tests)
    pub fn with_output_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: Some(path.into()),
        }
    }
}

impl RunReporter for ActionsReporter {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        if let Some(path) = &self.output_path {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::Report(format!("failed to open {}: {e}", path.display())))?;

            let line = if value.contains('\n') {
                // Multiline values use the heredoc form of the output file
                format!("{name}<<RELAY_EOF\n{value}\nRELAY_EOF\n")
            } else {
                format!("{name}={value}\n")
            };

            file.write_all(line.as_bytes())
                .map_err(|e| Error::Report(format!("failed to write {}: {e}", path.display())))?;
        } else {
            println!("::set-output name={name}::{}", escape_data(value));
        }

        Ok(())
    }

    fn set_failed(&self, message: &str) -> Result<()> {
        println!("::error::{}", escape_data(message));
        Ok(())
    }
}

/// Read a named CI input string (`INPUT_<NAME>` by convention).
///
/// Returns `None` when the input isn't declared or is empty.
pub fn read_input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Escape a value for embedding in a workflow command line.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
