//! Morphosyntactic tags
//!
//! Tags follow the colon-separated positional layout used by Polish
//! morphological dictionaries (`subst:sg:acc:f`, `adj:pl:nom.voc:m1.p1:pos`),
//! where each position may list dot-separated alternatives. A tag is parsed
//! once into typed slots; queries then look at the slot they need instead of
//! scanning the raw string.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Grammatical case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Case {
    /// Mianownik
    Nominative,
    /// Dopełniacz
    Genitive,
    /// Celownik
    Dative,
    /// Biernik
    Accusative,
    /// Narzędnik
    Instrumental,
    /// Miejscownik
    Locative,
    /// Wołacz
    Vocative,
}

impl Case {
    /// Resolution order when a tag admits several cases
    pub const PRIORITY: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Locative,
        Case::Vocative,
    ];

    /// Tag code
    pub fn code(self) -> &'static str {
        match self {
            Case::Nominative => "nom",
            Case::Genitive => "gen",
            Case::Dative => "dat",
            Case::Accusative => "acc",
            Case::Instrumental => "inst",
            Case::Locative => "loc",
            Case::Vocative => "voc",
        }
    }

    /// Parse a tag code
    pub fn from_code(code: &str) -> Option<Case> {
        Case::PRIORITY.into_iter().find(|case| case.code() == code)
    }

    /// English name
    pub fn english_name(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Locative => "locative",
            Case::Vocative => "vocative",
        }
    }

    /// Polish name
    pub fn polish_name(self) -> &'static str {
        match self {
            Case::Nominative => "mianownik",
            Case::Genitive => "dopełniacz",
            Case::Dative => "celownik",
            Case::Accusative => "biernik",
            Case::Instrumental => "narzędnik",
            Case::Locative => "miejscownik",
            Case::Vocative => "wołacz",
        }
    }

    /// Name under the given naming scheme
    pub fn name(self, naming: CaseNaming) -> &'static str {
        match naming {
            CaseNaming::English => self.english_name(),
            CaseNaming::Polish => self.polish_name(),
        }
    }
}

/// How case names are written into enriched placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseNaming {
    /// `accusative`
    #[default]
    English,
    /// `biernik`
    Polish,
}

/// Morphological gender as written into enriched placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Written as `woman`
    Feminine,
    /// Written as `man`
    Masculine,
}

impl Gender {
    /// Placeholder form
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Feminine => "woman",
            Gender::Masculine => "man",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How tags are queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatching {
    /// Query the parsed slots
    #[default]
    Structured,
    /// Search codes as raw substrings of the tag string. Reproduces the
    /// output of earlier tooling, false positives included (the gender scan
    /// takes the `m` of `nom` for a masculine marker).
    Substring,
}

/// Part of speech (first tag position)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// `subst`
    Noun,
    /// `depr`
    Depreciative,
    /// `adj`
    Adjective,
    /// Anything else, kept verbatim
    Other(String),
}

impl PartOfSpeech {
    fn parse(code: &str) -> Self {
        match code {
            "subst" => PartOfSpeech::Noun,
            "depr" => PartOfSpeech::Depreciative,
            "adj" => PartOfSpeech::Adjective,
            other => PartOfSpeech::Other(other.to_string()),
        }
    }
}

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// `sg`
    Singular,
    /// `pl`
    Plural,
}

const GENDER_CODES: [&str; 11] = [
    "m1", "m2", "m3", "m", "f", "n", "n1", "n2", "p1", "p2", "p3",
];
const MASCULINE_CODES: [&str; 4] = ["m1", "m2", "m3", "m"];

/// A parsed morphosyntactic tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphTag {
    raw: String,
    pos: PartOfSpeech,
    number: Option<Number>,
    cases: SmallVec<[Case; 4]>,
    genders: SmallVec<[String; 4]>,
}

impl MorphTag {
    /// Parse a tag string. Never fails: unknown positions are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut positions = raw.split(':');
        let pos = PartOfSpeech::parse(positions.next().unwrap_or_default());
        let mut number = None;
        let mut cases = SmallVec::new();
        let mut genders = SmallVec::new();

        for position in positions {
            let values: SmallVec<[&str; 4]> = position.split('.').collect();
            if values.iter().all(|v| Case::from_code(v).is_some()) {
                cases.extend(values.iter().filter_map(|v| Case::from_code(v)));
            } else if values.iter().all(|v| GENDER_CODES.contains(v)) {
                genders.extend(values.iter().map(|v| v.to_string()));
            } else if number.is_none() {
                number = match position {
                    "sg" => Some(Number::Singular),
                    "pl" => Some(Number::Plural),
                    _ => None,
                };
            }
        }

        Self {
            raw: raw.to_string(),
            pos,
            number,
            cases,
            genders,
        }
    }

    /// Original tag string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Part of speech
    pub fn pos(&self) -> &PartOfSpeech {
        &self.pos
    }

    /// Grammatical number, if the tag carries one
    pub fn number(&self) -> Option<Number> {
        self.number
    }

    /// Case alternatives in tag order
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Whether the tag marks a noun
    pub fn is_noun(&self, matching: TagMatching) -> bool {
        match matching {
            TagMatching::Structured => self.pos == PartOfSpeech::Noun,
            TagMatching::Substring => self.raw.contains("subst"),
        }
    }

    /// Whether the tag marks an adjective
    pub fn is_adjective(&self, matching: TagMatching) -> bool {
        match matching {
            TagMatching::Structured => self.pos == PartOfSpeech::Adjective,
            TagMatching::Substring => self.raw.contains("adj"),
        }
    }

    /// First case in [`Case::PRIORITY`] order carried by the tag
    pub fn case(&self, matching: TagMatching) -> Option<Case> {
        match matching {
            TagMatching::Structured => Case::PRIORITY
                .into_iter()
                .find(|case| self.cases.contains(case)),
            TagMatching::Substring => Case::PRIORITY
                .into_iter()
                .find(|case| self.raw.contains(case.code())),
        }
    }

    /// Gender: feminine wins over masculine; neuter and plural-only genders
    /// resolve to nothing.
    pub fn gender(&self, matching: TagMatching) -> Option<Gender> {
        match matching {
            TagMatching::Structured => {
                if self.genders.iter().any(|g| g == "f") {
                    Some(Gender::Feminine)
                } else if self
                    .genders
                    .iter()
                    .any(|g| MASCULINE_CODES.contains(&g.as_str()))
                {
                    Some(Gender::Masculine)
                } else {
                    None
                }
            }
            TagMatching::Substring => self
                .raw
                .split(':')
                .flat_map(|position| position.split('.'))
                .find_map(|part| {
                    if part.contains('f') {
                        Some(Gender::Feminine)
                    } else if part.contains('m') {
                        Some(Gender::Masculine)
                    } else {
                        None
                    }
                }),
        }
    }
}

impl fmt::Display for MorphTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
