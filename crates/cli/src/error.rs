//! Errors surfaced by the `nutil` binary and their process exit codes.
//!
//! | code | cause |
//! |------|-------|
//! | 0    | success |
//! | 2    | rejected by clap before any subcommand runs |
//! | 10   | toolkit rejected a value (color hex, vector text, buffer size) |
//! | 11   | PNG could not be read or written |
//! | 12   | malformed `--centers` or `--params` |
//! | 13   | result could not be encoded as JSON |

use nutil_core::ToolkitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Toolkit(ToolkitError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Toolkit(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// PNG failures surface from the toolkit as `ToolkitError::Io` and keep the
/// I/O exit code; everything else is a rejected value.
impl From<ToolkitError> for CliError {
    fn from(e: ToolkitError) -> Self {
        match e {
            ToolkitError::Io(msg) => CliError::Io(msg),
            other => CliError::Toolkit(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
