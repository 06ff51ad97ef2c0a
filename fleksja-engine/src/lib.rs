//! Batch orchestration for placeholder enrichment
//!
//! Pairs original and anonymized lines, runs them through a sequential or a
//! pooled executor with one context per worker, and joins the results back
//! in line order.
//!
//! ```rust
//! use fleksja_core::morph::Dictionary;
//! use fleksja_core::AnalyzerError;
//! use fleksja_engine::Enricher;
//!
//! let factory = || -> Result<Dictionary, AnalyzerError> {
//!     Ok(Dictionary::new().with_entry("Annę", "Anna", "subst:sg:acc:f", &[]))
//! };
//! let output = Enricher::new()
//!     .process("Spotkał Annę.\n", "Spotkał [name].\n", &factory)
//!     .unwrap();
//! assert_eq!(output.text, "Spotkał [name][woman][accusative].\n");
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod chunker;
pub mod config;
pub mod error;
pub mod executor;
pub mod processor;

pub use assembler::{Assembly, ResultAssembler};
pub use chunker::{ChunkPlan, LineChunker, LinePair};
pub use config::{EngineConfig, FailurePolicy};
pub use error::{EngineError, Result};
pub use executor::{ChunkFailure, ExecutionMode, Executor};
pub use processor::{EngineOutput, Enricher, EnricherBuilder, ProcessingStats};

// Re-export from core for convenience
pub use fleksja_core::{AnalyzerFactory, LabelConfig};
