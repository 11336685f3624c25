//! Stream output sink

use super::OutputSink;
use anyhow::Result;
use std::io::{self, Write};

/// Writes output verbatim to a stream, stdout by default
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    /// Create a new stream sink
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamSink<io::Stdout> {
    /// Create a sink that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for StreamSink<W> {
    fn write_output(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_verbatim() {
        let mut sink = StreamSink::new(Vec::new());
        sink.write_output("<p>one</p>").unwrap();
        sink.write_output("\n").unwrap();
        sink.finish().unwrap();

        assert_eq!(sink.into_inner(), b"<p>one</p>\n");
    }

    #[test]
    fn test_no_trailing_newline_added() {
        let mut sink = StreamSink::new(Vec::new());
        sink.write_output("[]").unwrap();
        sink.finish().unwrap();

        assert_eq!(sink.into_inner(), b"[]");
    }
}
