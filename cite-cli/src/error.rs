//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// None of `--input`, `--text` or `--url` was given
    MissingInput,
    /// The `--input` path does not exist
    InputFileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Writing the output file failed
    OutputWriteError(String),
    /// The formatter failed
    FormatterError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingInput => {
                write!(f, "Please give argument input file, url or text")
            }
            CliError::InputFileNotFound(path) => write!(f, "Input file does not exist: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputWriteError(msg) => write!(f, "Failed to write output: {msg}"),
            CliError::FormatterError(msg) => write!(f, "Formatter error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
