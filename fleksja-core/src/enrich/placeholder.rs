use crate::morph::{Case, CaseNaming, Gender};

/// A placeholder with whatever inflection could be resolved for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichedPlaceholder<'a> {
    /// Label without brackets
    pub label: &'a str,
    /// Resolved gender
    pub gender: Option<Gender>,
    /// Resolved case
    pub case: Option<Case>,
}

impl<'a> EnrichedPlaceholder<'a> {
    /// A placeholder left as it was
    pub fn unchanged(label: &'a str) -> Self {
        Self {
            label,
            gender: None,
            case: None,
        }
    }

    /// Whether anything was resolved
    pub fn is_enriched(&self) -> bool {
        self.gender.is_some() || self.case.is_some()
    }

    /// Append `[label][gender][case]`, leaving out unresolved parts
    pub fn write_to(&self, out: &mut String, naming: CaseNaming) {
        out.push('[');
        out.push_str(self.label);
        out.push(']');
        if let Some(gender) = self.gender {
            out.push('[');
            out.push_str(gender.as_str());
            out.push(']');
        }
        if let Some(case) = self.case {
            out.push('[');
            out.push_str(case.name(naming));
            out.push(']');
        }
    }

    /// Render to a new string
    pub fn render(&self, naming: CaseNaming) -> String {
        let mut out = String::new();
        self.write_to(&mut out, naming);
        out
    }
}
