//! JSON statistics

use super::StatsFormatter;
use anyhow::Result;
use fleksja_engine::ProcessingStats;
use std::io::Write;

/// Statistics as one pretty-printed JSON object
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> StatsFormatter for JsonFormatter<W> {
    fn write_stats(&mut self, stats: &ProcessingStats) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, stats)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
