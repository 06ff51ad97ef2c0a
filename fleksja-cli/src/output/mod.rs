//! Output module
//!
//! The enriched text goes to a file or stdout; statistics always go to
//! stderr so they never mix with text written to stdout.

use anyhow::{Context, Result};
use fleksja_engine::ProcessingStats;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for statistics formatters
pub trait StatsFormatter {
    /// Write one batch's statistics
    fn write_stats(&mut self, stats: &ProcessingStats) -> Result<()>;
}

/// Statistics format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatsFormat {
    /// Human-readable summary
    Text,
    /// One JSON object
    Json,
}

impl StatsFormat {
    /// Formatter writing to `writer`
    pub fn formatter<'w, W: Write + 'w>(self, writer: W) -> Box<dyn StatsFormatter + 'w> {
        match self {
            StatsFormat::Text => Box::new(TextFormatter::new(writer)),
            StatsFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

/// Write the enriched text to `path`, or stdout when `None`
pub fn write_text(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
