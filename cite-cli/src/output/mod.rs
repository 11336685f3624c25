//! Output writing module

use anyhow::Result;
use std::path::PathBuf;

/// Trait for output sinks
pub trait OutputSink {
    /// Queue formatted text for output
    fn write_output(&mut self, text: &str) -> Result<()>;

    /// Flush everything to its destination
    fn finish(&mut self) -> Result<()>;
}

pub mod file;
pub mod stream;

pub use file::FileSink;
pub use stream::StreamSink;

/// Destination of the formatted output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file at the fully resolved path
    File(PathBuf),
}

impl OutputTarget {
    /// Open a sink for this target
    pub fn open(self) -> Box<dyn OutputSink> {
        match self {
            OutputTarget::Stdout => Box::new(StreamSink::stdout()),
            OutputTarget::File(path) => Box::new(FileSink::new(path)),
        }
    }
}

/// Write `text` to `target` in one go
pub fn write_output(target: OutputTarget, text: &str) -> Result<()> {
    log::debug!("Writing {} bytes to {:?}", text.len(), target);
    let mut sink = target.open();
    sink.write_output(text)?;
    sink.finish()
}
