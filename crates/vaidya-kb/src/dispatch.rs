//! Top-level query dispatch: greetings and meta queries short-circuit,
//! everything else runs match → classify → render.

use tracing::debug;

use crate::dataset::KnowledgeBase;
use crate::intent::IntentKind;
use crate::{matcher, reply};

/// Phrases answered with the introduction before any disease matching.
/// Single words match as whole words, multi-word phrases as substrings —
/// a raw substring check would fire "hi" inside "this".
const GREETING_PHRASES: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "help",
    "introduce",
    "start",
    "who are you",
    "what are you",
    "what can you do",
];

const EMPTY_PROMPT: &str =
    "❓ Please enter a disease name or ask a question about a specific disease.";

const INTRODUCTION: &str = "\
🏥 **Hello! I'm Vaidya — your health information assistant.**

🤖 **What I can do:**
• Look up detailed information about the diseases in my knowledge base
• Explain symptoms, causes, and precautions
• Suggest home treatments and remedies
• Share WHO guidelines and health awareness facts

💬 **How to use me:**
• Ask about any disease: \"diabetes symptoms\"
• Ask about treatments: \"home treatment for asthma\"
• Ask about causes: \"what causes heart disease\"

⚠️ **Important:** I provide information for educational purposes. \
Always consult healthcare professionals for medical advice.

🌟 **Try asking:** \"What are the symptoms of diabetes?\" or \"Home treatment for headache\"";

/// Answer a raw query end to end.
pub fn process(kb: &KnowledgeBase, text: &str) -> String {
    let input = text.trim().to_lowercase();
    if input.is_empty() {
        return EMPTY_PROMPT.to_string();
    }
    if is_greeting(&input) {
        return INTRODUCTION.to_string();
    }

    let matched = matcher::find(kb, text);
    let Some(disease) = matched.disease else {
        return reply::no_disease_found(&kb.available_diseases());
    };

    let intent = IntentKind::classify(text);
    debug!(
        "Resolved {:?} (confidence {}) with intent {}",
        disease, matched.confidence, intent
    );

    let record = kb.get(&disease);
    match intent {
        IntentKind::Comprehensive => reply::render_comprehensive(record, &disease),
        _ => reply::format(record, intent, &disease),
    }
}

fn is_greeting(input: &str) -> bool {
    GREETING_PHRASES.iter().any(|phrase| {
        if phrase.contains(' ') {
            input.contains(phrase)
        } else {
            input
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| word == *phrase)
        }
    })
}
