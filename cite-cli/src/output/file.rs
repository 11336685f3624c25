//! File output sink

use super::OutputSink;
use crate::error::CliError;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Buffers output and writes the whole file on [`finish`](OutputSink::finish)
pub struct FileSink {
    path: PathBuf,
    buffer: String,
}

impl FileSink {
    /// Create a sink for `path`; nothing touches the disk until `finish`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: String::new(),
        }
    }
}

impl OutputSink for FileSink {
    fn write_output(&mut self, text: &str) -> Result<()> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        fs::write(&self.path, &self.buffer)
            .map_err(|e| CliError::OutputWriteError(format!("{}: {e}", self.path.display())))?;
        log::info!("Wrote {}", self.path.display());
        Ok(())
    }
}
