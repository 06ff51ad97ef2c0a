//! Case and gender restoration for anonymized Polish text
//!
//! Anonymization replaces names, cities and similar spans with bracketed
//! placeholders such as `[name]`, which loses the grammatical form of the
//! replaced word. This crate aligns an anonymized line with its original,
//! looks up the replaced word in a morphological dictionary and writes the
//! recovered gender and case next to the placeholder.
//!
//! # Example
//!
//! ```rust
//! use fleksja_core::morph::Dictionary;
//! use fleksja_core::{process_chunk, TagEnricher, WorkerContext};
//!
//! let dictionary = Dictionary::new().with_entry("Annę", "Anna", "subst:sg:acc:f", &["imię"]);
//! let enricher = TagEnricher::default();
//! let mut context = WorkerContext::new(dictionary);
//!
//! let out = process_chunk(
//!     &enricher,
//!     &mut context,
//!     "Spotkał Annę w parku.",
//!     "Spotkał [name] w parku.",
//! );
//! assert_eq!(out.text, "Spotkał [name][woman][accusative] w parku.");
//! ```

pub mod align;
pub mod config;
pub mod enrich;
pub mod error;
pub mod morph;
pub mod pipeline;
pub mod tokenizer;

pub use align::{align, AlignmentOp, OpKind};
pub use config::{LabelConfig, PolicyKind};
pub use enrich::{EnrichedPlaceholder, TagEnricher};
pub use error::{AnalyzerError, CoreError, Result};
pub use morph::{Analyzer, AnalyzerFactory, MorphCache, MorphCandidate};
pub use pipeline::{process_chunk, ChunkOutput, WorkerContext};
pub use tokenizer::{detokenize, tokenize, Token, TokenKind};
