//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use cite_core::{CommandFormatter, ExtensionSeparator};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Formatter backend configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        log::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;

        Self::from_toml(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Formatter backend configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    /// Formatter program to run
    pub program: PathBuf,

    /// Argument templates
    pub args: Vec<String>,

    /// Write the input to the program's stdin
    pub stdin: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("citation-js"),
            args: [
                "--text",
                "{input}",
                "--output-type",
                "{type}",
                "--output-style",
                "{style}",
                "--output-language",
                "{lang}",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            stdin: false,
        }
    }
}

impl BackendConfig {
    /// Build the formatter described by this configuration
    pub fn formatter(&self) -> CommandFormatter {
        CommandFormatter::new(&self.program)
            .args(self.args.iter().cloned())
            .stdin(self.stdin)
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Put a `.` between the output path and its extension
    pub insert_extension_dot: bool,
}

impl OutputConfig {
    pub fn separator(&self) -> ExtensionSeparator {
        if self.insert_extension_dot {
            ExtensionSeparator::Dot
        } else {
            ExtensionSeparator::None
        }
    }
}
