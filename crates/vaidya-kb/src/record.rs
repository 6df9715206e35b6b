//! Disease records and the aspect taxonomy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One informational category about a disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Overview,
    Causes,
    Symptoms,
    Precautions,
    HomeTreatment,
    Awareness,
    WhoGuidelines,
}

impl Aspect {
    /// Canonical order — also the column order of the backing CSV.
    pub const ALL: [Aspect; 7] = [
        Aspect::Overview,
        Aspect::Causes,
        Aspect::Symptoms,
        Aspect::Precautions,
        Aspect::HomeTreatment,
        Aspect::Awareness,
        Aspect::WhoGuidelines,
    ];

    /// Column name in the backing CSV.
    pub fn column(&self) -> &'static str {
        match self {
            Aspect::Overview => "overview",
            Aspect::Causes => "causes",
            Aspect::Symptoms => "symptoms",
            Aspect::Precautions => "precautions",
            Aspect::HomeTreatment => "home_treatment",
            Aspect::Awareness => "awareness",
            Aspect::WhoGuidelines => "who_guidelines",
        }
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            Aspect::Overview => "Overview",
            Aspect::Causes => "Causes",
            Aspect::Symptoms => "Symptoms",
            Aspect::Precautions => "Precautions",
            Aspect::HomeTreatment => "Home Treatment",
            Aspect::Awareness => "Awareness",
            Aspect::WhoGuidelines => "WHO Guidelines",
        }
    }

    /// Emoji used in front of the section title.
    pub fn emoji(&self) -> &'static str {
        match self {
            Aspect::Overview => "📋",
            Aspect::Causes => "🔍",
            Aspect::Symptoms => "⚠️",
            Aspect::Precautions => "🛡️",
            Aspect::HomeTreatment => "🏠",
            Aspect::Awareness => "💡",
            Aspect::WhoGuidelines => "🏛️",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One row of the knowledge base: a disease name plus its aspect texts.
///
/// Aspect texts are stored verbatim; `aspect()` applies the presence
/// rules (blank and the "nan" placeholder count as absent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub name: String,
    aspects: BTreeMap<Aspect, String>,
}

impl DiseaseRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aspects: BTreeMap::new(),
        }
    }

    /// Builder-style aspect assignment, mainly for tests and seeding.
    pub fn with_aspect(mut self, aspect: Aspect, text: impl Into<String>) -> Self {
        self.set_aspect(aspect, text);
        self
    }

    pub fn set_aspect(&mut self, aspect: Aspect, text: impl Into<String>) {
        self.aspects.insert(aspect, text.into());
    }

    /// Aspect text, trimmed. `None` when the aspect is missing, blank, or
    /// holds the "nan" placeholder left behind by tabular exports.
    pub fn aspect(&self, aspect: Aspect) -> Option<&str> {
        let text = self.aspects.get(&aspect)?.trim();
        if text.is_empty() || text == "nan" {
            None
        } else {
            Some(text)
        }
    }

    /// Stored text without the presence rules, for re-serialization.
    pub fn raw_aspect(&self, aspect: Aspect) -> Option<&str> {
        self.aspects.get(&aspect).map(String::as_str)
    }
}
