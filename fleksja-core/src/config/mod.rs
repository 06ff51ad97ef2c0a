//! Label configuration
//!
//! Which placeholder labels are enriched, which policy each one uses, and how
//! results are written. A Polish configuration is embedded in the crate;
//! custom ones are read from TOML files with the same layout.

mod loader;
mod types;

pub use loader::{default_config, EMBEDDED_POLISH};
pub use types::{EnrichmentConfig, LabelConfig, LabelRule, MetadataConfig, PolicyKind};
