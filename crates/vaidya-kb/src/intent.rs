//! Query-intent classification via trigger-keyword scoring.
//!
//! Keyword heuristics only — fast, deterministic, no model. Each intent
//! counts how many of its trigger substrings occur in the query; the
//! highest count wins, ties break in `ALL` order, and a query with no
//! triggers at all is treated as an overview request.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::Aspect;

/// The informational need behind a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Comprehensive,
    HomeTreatment,
    Causes,
    Symptoms,
    Precautions,
    Awareness,
    WhoGuidelines,
    Overview,
}

impl IntentKind {
    /// Scoring and tie-break order.
    pub const ALL: [IntentKind; 8] = [
        IntentKind::Comprehensive,
        IntentKind::HomeTreatment,
        IntentKind::Causes,
        IntentKind::Symptoms,
        IntentKind::Precautions,
        IntentKind::Awareness,
        IntentKind::WhoGuidelines,
        IntentKind::Overview,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IntentKind::Comprehensive => "comprehensive",
            IntentKind::HomeTreatment => "home_treatment",
            IntentKind::Causes => "causes",
            IntentKind::Symptoms => "symptoms",
            IntentKind::Precautions => "precautions",
            IntentKind::Awareness => "awareness",
            IntentKind::WhoGuidelines => "who_guidelines",
            IntentKind::Overview => "overview",
        }
    }

    /// Title used in response headers.
    pub fn title(&self) -> &'static str {
        match self {
            IntentKind::Comprehensive => "Comprehensive Information",
            IntentKind::HomeTreatment => "Home Treatment",
            IntentKind::Causes => "Causes",
            IntentKind::Symptoms => "Symptoms",
            IntentKind::Precautions => "Precautions",
            IntentKind::Awareness => "Awareness",
            IntentKind::WhoGuidelines => "WHO Guidelines",
            IntentKind::Overview => "Overview",
        }
    }

    /// Trigger substrings; each contributes at most one point no matter
    /// how often it repeats.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            IntentKind::Comprehensive => &[
                "everything",
                "comprehensive",
                "complete",
                "full",
                "brief",
                "all about",
                "all information",
                "detailed",
                "complete guide",
                "full details",
                "overview",
                "comprehensive information",
                "complete information",
                "full information",
                "all details",
                "everything about",
                "tell me all",
                "comprehensive guide",
            ],
            IntentKind::HomeTreatment => &[
                "home treatment",
                "home remedy",
                "natural treatment",
                "home cure",
                "traditional treatment",
                "ayurvedic",
                "herbal",
                "treatment",
                "cure",
                "medicine",
                "therapy",
                "heal",
            ],
            IntentKind::Causes => &["causes", "reason", "why", "how does", "what causes"],
            IntentKind::Symptoms => &["symptoms", "signs", "feel", "experience"],
            IntentKind::Precautions => &["precautions", "prevention", "avoid", "prevent", "protect"],
            IntentKind::Awareness => &["awareness", "know", "understand", "facts"],
            IntentKind::WhoGuidelines => &[
                "guidelines",
                "who guidelines",
                "medical guidelines",
                "recommendations",
            ],
            IntentKind::Overview => &["what is", "about", "general", "information"],
        }
    }

    /// Aspect rendering order when answering this intent: the natural
    /// aspect first, the rest in a fixed fallback order.
    pub fn priority(&self) -> [Aspect; 7] {
        use Aspect::*;
        match self {
            IntentKind::Comprehensive => {
                [Overview, Causes, Symptoms, Precautions, HomeTreatment, Awareness, WhoGuidelines]
            }
            IntentKind::HomeTreatment => {
                [HomeTreatment, Causes, Symptoms, Precautions, Awareness, WhoGuidelines, Overview]
            }
            IntentKind::Causes => {
                [Causes, Symptoms, Precautions, HomeTreatment, Awareness, WhoGuidelines, Overview]
            }
            IntentKind::Symptoms => {
                [Symptoms, Causes, Precautions, HomeTreatment, Awareness, WhoGuidelines, Overview]
            }
            IntentKind::Precautions => {
                [Precautions, Symptoms, Causes, HomeTreatment, Awareness, WhoGuidelines, Overview]
            }
            IntentKind::Awareness => {
                [Awareness, Overview, Symptoms, Causes, Precautions, HomeTreatment, WhoGuidelines]
            }
            IntentKind::WhoGuidelines => {
                [WhoGuidelines, Awareness, Precautions, HomeTreatment, Symptoms, Causes, Overview]
            }
            IntentKind::Overview => {
                [Overview, Symptoms, Causes, Precautions, HomeTreatment, Awareness, WhoGuidelines]
            }
        }
    }

    /// Classify free text by trigger-keyword count.
    pub fn classify(text: &str) -> IntentKind {
        let input = text.to_lowercase();
        let mut best = IntentKind::Overview;
        let mut best_score = 0;
        for kind in IntentKind::ALL {
            let score = kind
                .keywords()
                .iter()
                .filter(|keyword| input.contains(*keyword))
                .count();
            if score > best_score {
                best = kind;
                best_score = score;
            }
        }
        best
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_queries() {
        assert_eq!(IntentKind::classify("what are the symptoms of diabetes"), IntentKind::Symptoms);
        assert_eq!(IntentKind::classify("warning signs I should watch"), IntentKind::Symptoms);
    }

    #[test]
    fn test_cause_queries() {
        assert_eq!(IntentKind::classify("what causes heart disease"), IntentKind::Causes);
        assert_eq!(IntentKind::classify("why do people get malaria"), IntentKind::Causes);
    }

    #[test]
    fn test_treatment_alias_folds_into_home_treatment() {
        assert_eq!(IntentKind::classify("home treatment for asthma"), IntentKind::HomeTreatment);
        assert_eq!(IntentKind::classify("is there a cure"), IntentKind::HomeTreatment);
        assert_eq!(IntentKind::classify("herbal medicine options"), IntentKind::HomeTreatment);
    }

    #[test]
    fn test_prevention_alias_folds_into_precautions() {
        assert_eq!(IntentKind::classify("how to prevent dengue"), IntentKind::Precautions);
        assert_eq!(IntentKind::classify("precautions against flu"), IntentKind::Precautions);
    }

    #[test]
    fn test_guidelines_queries() {
        assert_eq!(IntentKind::classify("who guidelines on tuberculosis"), IntentKind::WhoGuidelines);
    }

    #[test]
    fn test_comprehensive_queries() {
        assert_eq!(
            IntentKind::classify("tell me everything about diabetes"),
            IntentKind::Comprehensive
        );
        assert_eq!(IntentKind::classify("full details please"), IntentKind::Comprehensive);
    }

    #[test]
    fn test_no_trigger_defaults_to_overview() {
        assert_eq!(IntentKind::classify("asdkjh random words"), IntentKind::Overview);
        assert_eq!(IntentKind::classify(""), IntentKind::Overview);
    }

    #[test]
    fn test_each_trigger_counts_once() {
        // "symptoms symptoms symptoms" is one point, losing to two distinct
        // cause triggers.
        let intent = IntentKind::classify("symptoms symptoms what causes this and the reason for it");
        assert_eq!(intent, IntentKind::Causes);
    }

    #[test]
    fn test_priority_lists_cover_every_aspect() {
        for kind in IntentKind::ALL {
            let unique: std::collections::HashSet<_> = kind.priority().into_iter().collect();
            assert_eq!(unique.len(), 7, "{kind} priority list must cover all aspects");
        }
    }

    #[test]
    fn test_natural_aspect_comes_first() {
        assert_eq!(IntentKind::Symptoms.priority()[0], Aspect::Symptoms);
        assert_eq!(IntentKind::Causes.priority()[0], Aspect::Causes);
        assert_eq!(IntentKind::HomeTreatment.priority()[0], Aspect::HomeTreatment);
        assert_eq!(IntentKind::WhoGuidelines.priority()[0], Aspect::WhoGuidelines);
    }
}
