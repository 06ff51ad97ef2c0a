use super::types::LabelConfig;
use crate::error::{CoreError, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// The built-in Polish label configuration, as TOML text
pub const EMBEDDED_POLISH: &str = include_str!("../../configs/labels/polish.toml");

static DEFAULT_CONFIG: OnceLock<LabelConfig> = OnceLock::new();

/// The built-in configuration, parsed once per process
pub fn default_config() -> &'static LabelConfig {
    DEFAULT_CONFIG.get_or_init(|| {
        LabelConfig::from_toml_str(EMBEDDED_POLISH).expect("Failed to load embedded label config")
    })
}

impl LabelConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LabelConfig = toml::from_str(text)
            .map_err(|e| CoreError::Config(format!("Failed to parse label config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Check the label list
    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(CoreError::Config("at least one label is required".into()));
        }

        let mut seen = HashSet::new();
        for rule in &self.labels {
            let valid = !rule.name.is_empty()
                && rule
                    .name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-');
            if !valid {
                return Err(CoreError::Config(format!(
                    "label '{}' may only contain ASCII letters, digits and '-'",
                    rule.name
                )));
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(CoreError::Config(format!(
                    "label '{}' is defined more than once",
                    rule.name
                )));
            }
        }

        Ok(())
    }

    /// Label names in configuration order
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|rule| rule.name.as_str())
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        default_config().clone()
    }
}
