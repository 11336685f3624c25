//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Fail with [`CliError::InputFileNotFound`] unless `path` exists
    pub fn ensure_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(CliError::InputFileNotFound(path.display().to_string()).into());
        }
        Ok(())
    }
}
