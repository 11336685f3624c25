//! Input source selection

use super::FileReader;
use crate::error::CliError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Where the raw bibliographic input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// A URL, handed to the formatter as text
    Url(String),
    /// Literal input text
    Text(String),
}

impl InputSource {
    /// Pick the input source from the command-line values.
    ///
    /// `--input` wins over `--url`, which wins over `--text`. Empty text or
    /// URL values count as absent. A given input file must exist, so an empty
    /// path is reported as not found.
    pub fn resolve(input: Option<&Path>, text: Option<&str>, url: Option<&str>) -> Result<Self> {
        let text = text.filter(|text| !text.is_empty());
        let url = url.filter(|url| !url.is_empty());

        if let Some(path) = input {
            FileReader::ensure_exists(path)?;
            return Ok(InputSource::File(path.to_path_buf()));
        }

        if let Some(url) = url {
            log::warn!("--url is deprecated, use --text instead");
            return Ok(InputSource::Url(url.to_string()));
        }

        match text {
            Some(text) => Ok(InputSource::Text(text.to_string())),
            None => Err(CliError::MissingInput.into()),
        }
    }

    /// Load the full input into memory
    pub fn read(self) -> Result<String> {
        match self {
            InputSource::File(path) => FileReader::read_text(&path),
            InputSource::Url(url) => Ok(url),
            InputSource::Text(text) => Ok(text),
        }
    }

    /// Short description for log messages
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => format!("file {}", path.display()),
            InputSource::Url(url) => format!("url {url}"),
            InputSource::Text(text) => format!("text ({} bytes)", text.len()),
        }
    }
}
