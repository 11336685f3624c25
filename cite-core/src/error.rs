//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving how formatted output is written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The output type has no file extension mapping
    #[error("no file extension is defined for output type '{0}'")]
    UnmappedExtension(String),
}

/// Errors raised by a [`Formatter`](crate::Formatter) implementation
#[derive(Error, Debug)]
pub enum FormatError {
    /// The formatter program could not be started
    #[error("failed to spawn formatter '{}': {source}", .program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the input to the formatter's stdin failed
    #[error("failed to write to formatter '{}' stdin: {source}", .program.display())]
    StdinWriteFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The formatter exited unsuccessfully
    #[error(
        "formatter '{}' exited with status {code}{}",
        .program.display(),
        stderr_suffix(.stderr)
    )]
    NonZeroExit {
        program: PathBuf,
        code: i32,
        stderr: String,
    },

    /// The formatter produced output that is not UTF-8
    #[error("formatter '{}' produced invalid UTF-8 output", .0.display())]
    InvalidUtf8Output(PathBuf),

    /// The format options could not be encoded for the formatter
    #[error("failed to encode format options: {0}")]
    Options(#[from] serde_json::Error),

    /// Any other failure reported by a formatter
    #[error("{0}")]
    Other(String),
}

fn stderr_suffix(stderr: &str) -> String {
    match stderr.trim() {
        "" => String::new(),
        message => format!(": {message}"),
    }
}

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, CoreError>;
