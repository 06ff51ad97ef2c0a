//! Plain text statistics

use super::StatsFormatter;
use anyhow::Result;
use fleksja_engine::ProcessingStats;
use std::io::Write;

/// Human-readable statistics summary
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> StatsFormatter for TextFormatter<W> {
    fn write_stats(&mut self, stats: &ProcessingStats) -> Result<()> {
        writeln!(
            self.writer,
            "Lines: {} ({:?}, {} workers)",
            stats.lines, stats.execution_mode, stats.workers
        )?;
        if stats.dropped_original_lines > 0 || stats.dropped_anonymized_lines > 0 {
            writeln!(
                self.writer,
                "Dropped lines: {} original, {} anonymized",
                stats.dropped_original_lines, stats.dropped_anonymized_lines
            )?;
        }
        writeln!(
            self.writer,
            "Placeholders: {} enriched of {}",
            stats.enriched, stats.placeholders
        )?;
        writeln!(
            self.writer,
            "Cache: {} word forms ({} hits, {} misses, {} lookup failures)",
            stats.cache_size, stats.cache.hits, stats.cache.misses, stats.cache.failures
        )?;
        for failure in &stats.failures {
            writeln!(
                self.writer,
                "Failed line {}: {}",
                failure.index + 1,
                failure.reason
            )?;
        }
        writeln!(self.writer, "Time: {:.2} ms", stats.processing_time_ms)?;
        self.writer.flush()?;
        Ok(())
    }
}
