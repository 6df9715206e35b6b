//! Disease-name resolution: staged exact/substring checks, then fuzzy
//! scoring against the whole vocabulary.
//!
//! The rules run in strict precedence order and the first hit wins:
//! exact equal (100) → name contained in the query (95) → every name word
//! present (90) → best fuzzy score at or above the threshold → a single
//! long query word inside a name (75).

use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;
use tracing::debug;

use crate::dataset::KnowledgeBase;

/// Minimum fuzzy score accepted as a match.
const FUZZY_THRESHOLD: u8 = 75;

/// Query words at or below this many characters are ignored by the
/// fallback rule.
const FALLBACK_MIN_WORD_CHARS: usize = 3;

/// Outcome of a disease-name search.
///
/// Confidence is a relative ranking score in 0–100, not a probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub disease: Option<String>,
    pub confidence: u8,
}

impl MatchResult {
    pub fn none() -> Self {
        Self {
            disease: None,
            confidence: 0,
        }
    }

    fn hit(name: &str, confidence: u8) -> Self {
        Self {
            disease: Some(name.to_string()),
            confidence,
        }
    }

    pub fn is_match(&self) -> bool {
        self.disease.is_some()
    }
}

/// Resolve the best-matching disease name for free text.
///
/// Deterministic for a given knowledge base snapshot; ties within a rule
/// resolve in dataset order (and, for the fallback rule, query word order).
pub fn find(kb: &KnowledgeBase, text: &str) -> MatchResult {
    let input = text.trim().to_lowercase();
    if kb.is_empty() || input.is_empty() {
        return MatchResult::none();
    }

    for record in kb.records() {
        if record.name.to_lowercase() == input {
            return MatchResult::hit(&record.name, 100);
        }
    }

    for record in kb.records() {
        if input.contains(&record.name.to_lowercase()) {
            return MatchResult::hit(&record.name, 95);
        }
    }

    for record in kb.records() {
        let name = record.name.to_lowercase();
        if name.split_whitespace().all(|word| input.contains(word)) {
            return MatchResult::hit(&record.name, 90);
        }
    }

    let mut best: Option<(&str, u8)> = None;
    for record in kb.records() {
        let score = fuzzy_score(&input, &record.name.to_lowercase());
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((record.name.as_str(), score));
        }
    }
    if let Some((name, score)) = best {
        if score >= FUZZY_THRESHOLD {
            debug!("Fuzzy match {:?} scored {}", name, score);
            return MatchResult::hit(name, score);
        }
    }

    for word in input.split_whitespace() {
        if word.chars().count() <= FALLBACK_MIN_WORD_CHARS {
            continue;
        }
        for record in kb.records() {
            if record.name.to_lowercase().contains(word) {
                return MatchResult::hit(&record.name, FUZZY_THRESHOLD);
            }
        }
    }

    MatchResult::none()
}

/// Resolve a disease when an upstream extractor already proposed a name.
///
/// A candidate that exists in the knowledge base is trusted outright and
/// returned under its canonical stored spelling; anything else falls back
/// to the full search over the original text.
pub fn validate_and_find(kb: &KnowledgeBase, candidate: &str, text: &str) -> MatchResult {
    if let Some(record) = kb.get(candidate) {
        return MatchResult::hit(&record.name, 100);
    }
    find(kb, text)
}

/// Best of the four scorers for one candidate name.
fn fuzzy_score(input: &str, name: &str) -> u8 {
    ratio(input, name)
        .max(partial_ratio(input, name))
        .max(token_sort_ratio(input, name))
        .max(token_set_ratio(input, name))
}

/// Full-string similarity on a 0–100 scale.
fn ratio(a: &str, b: &str) -> u8 {
    (normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Best alignment of the shorter string against every equal-length
/// character window of the longer one.
fn partial_ratio(a: &str, b: &str) -> u8 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    if short_len == 0 {
        return 0;
    }
    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0;
    for start in 0..=(long_chars.len() - short_len) {
        let window: String = long_chars[start..start + short_len].iter().collect();
        best = best.max(ratio(short, &window));
        if best == 100 {
            break;
        }
    }
    best
}

/// Similarity after whitespace tokenization and lexicographic sort.
fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

fn sorted_tokens(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

/// Similarity over shared and distinct token groups; the best of the three
/// pairings wins. Forgiving when one side is a superset of the other.
fn token_set_ratio(a: &str, b: &str) -> u8 {
    use std::collections::BTreeSet;

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    let common: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let base = common.join(" ");
    let combined_a = join_groups(&common, &only_a);
    let combined_b = join_groups(&common, &only_b);

    ratio(&base, &combined_a)
        .max(ratio(&base, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

fn join_groups(first: &[&str], second: &[&str]) -> String {
    first
        .iter()
        .chain(second.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DiseaseRecord;

    fn kb_with(names: &[&str]) -> KnowledgeBase {
        let records = names.iter().map(|n| DiseaseRecord::new(*n)).collect();
        KnowledgeBase::from_records(records, "unused.csv")
    }

    #[test]
    fn test_exact_name_scores_100() {
        let kb = kb_with(&["asthma", "diabetes"]);
        let result = find(&kb, "asthma");
        assert_eq!(result.disease.as_deref(), Some("asthma"));
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let kb = kb_with(&["asthma"]);
        assert_eq!(find(&kb, "ASTHMA"), find(&kb, "asthma"));
        assert_eq!(find(&kb, "AsThMa").confidence, 100);
    }

    #[test]
    fn test_name_inside_query_scores_95() {
        let kb = kb_with(&["asthma"]);
        let result = find(&kb, "what are the symptoms of asthma please");
        assert_eq!(result.disease.as_deref(), Some("asthma"));
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn test_all_name_words_present_scores_90() {
        let kb = kb_with(&["heart disease"]);
        let result = find(&kb, "disease affecting the heart");
        assert_eq!(result.disease.as_deref(), Some("heart disease"));
        assert_eq!(result.confidence, 90);
    }

    #[test]
    fn test_misspelling_resolves_through_fuzzy_pass() {
        let kb = kb_with(&["diabetes", "dengue"]);
        let result = find(&kb, "diabetis");
        assert_eq!(result.disease.as_deref(), Some("diabetes"));
        assert!(result.confidence >= FUZZY_THRESHOLD && result.confidence < 95);
    }

    #[test]
    fn test_long_word_fallback_scores_75() {
        let kb = kb_with(&["tuberculosis"]);
        // "tuber" is no fuzzy match for the full name but appears inside it.
        let result = find(&kb, "info on tuber please");
        assert_eq!(result.disease.as_deref(), Some("tuberculosis"));
        assert_eq!(result.confidence, 75);
    }

    #[test]
    fn test_short_words_do_not_trigger_fallback() {
        let kb = kb_with(&["acne"]);
        let result = find(&kb, "is it bad");
        assert_eq!(result, MatchResult::none());
    }

    #[test]
    fn test_gibberish_returns_none() {
        let kb = kb_with(&["asthma", "diabetes", "malaria"]);
        let result = find(&kb, "zzqq xwvy kjhg");
        assert_eq!(result.disease, None);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn test_empty_base_never_matches() {
        let kb = kb_with(&[]);
        assert_eq!(find(&kb, "asthma"), MatchResult::none());
    }

    #[test]
    fn test_dataset_order_breaks_ties() {
        let kb = kb_with(&["dengue fever", "yellow fever"]);
        let result = find(&kb, "tell me about fever dengue yellow");
        assert_eq!(result.disease.as_deref(), Some("dengue fever"));
    }

    #[test]
    fn test_validate_trusts_known_candidate() {
        let kb = kb_with(&["Asthma"]);
        let result = validate_and_find(&kb, "asthma", "completely unrelated text");
        assert_eq!(result.disease.as_deref(), Some("Asthma"));
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_validate_falls_back_for_unknown_candidate() {
        let kb = kb_with(&["asthma"]);
        let candidate = validate_and_find(&kb, "not-a-disease", "symptoms of asthma");
        assert_eq!(candidate, find(&kb, "symptoms of asthma"));
    }

    #[test]
    fn test_ratio_scale() {
        assert_eq!(ratio("asthma", "asthma"), 100);
        assert!(ratio("asthma", "zzzzzz") < 20);
    }

    #[test]
    fn test_partial_ratio_finds_window() {
        assert_eq!(partial_ratio("asthma", "asthma attack"), 100);
        assert_eq!(partial_ratio("asthma attack", "asthma"), 100);
    }

    #[test]
    fn test_token_sort_ignores_word_order() {
        assert_eq!(token_sort_ratio("disease heart", "heart disease"), 100);
    }

    #[test]
    fn test_token_set_forgives_extra_tokens() {
        assert_eq!(token_set_ratio("asthma", "asthma info extra"), 100);
    }
}
