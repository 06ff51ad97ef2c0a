use crate::morph::{CaseNaming, TagMatching};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    pub labels: Vec<LabelRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    #[serde(default)]
    pub case_naming: CaseNaming,
    #[serde(default)]
    pub tag_matching: TagMatching,
    #[serde(default = "default_feminine_suffix")]
    pub feminine_lemma_suffix: String,
    #[serde(default = "default_cleanup_chars")]
    pub cleanup_chars: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            case_naming: CaseNaming::default(),
            tag_matching: TagMatching::default(),
            feminine_lemma_suffix: default_feminine_suffix(),
            cleanup_chars: default_cleanup_chars(),
        }
    }
}

fn default_feminine_suffix() -> String {
    "a".to_string()
}

fn default_cleanup_chars() -> String {
    ".,;:(){}[]\n".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRule {
    pub name: String,
    pub policy: PolicyKind,
}

/// How a label's original span is recovered and resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Run of capitalised tokens, case only
    City,
    /// One token, noun readings only, case only
    Sex,
    /// One token, gender and case both required
    Inflected,
}

impl PolicyKind {
    /// Configuration name
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::City => "city",
            PolicyKind::Sex => "sex",
            PolicyKind::Inflected => "inflected",
        }
    }
}
