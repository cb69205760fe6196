//! Errors raised while reading the battery charge.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for charge source operations.
pub type Result<T> = std::result::Result<T, ChargeError>;

/// Operational failures of a charge source. All of them are fatal to a run.
#[derive(Error, Debug)]
pub enum ChargeError {
    #[error("this version does not yet support your OS ({os})")]
    Unsupported { os: String },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run `{program}`")]
    Command {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {}", describe_status(.status))]
    CommandFailed { program: String, status: Option<i32> },

    #[error("battery data has no `{key}` entry")]
    MissingKey { key: String },

    #[error("`{key}` is not an integer: {value:?}")]
    InvalidNumber { key: String, value: String },

    #[error("`{key}` reports zero full capacity")]
    ZeroCapacity { key: String },

    #[error("no battery percentage found in pmset output")]
    NoPercentage,
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl ChargeError {
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }
}
