//! Response rendering: priority-ordered sections, the comprehensive dump,
//! and the smaller single-aspect / menu / comparison replies.
//!
//! All functions are pure string builders. An aspect that is absent from a
//! record is skipped outright — never rendered as an empty heading.

use crate::intent::IntentKind;
use crate::record::{Aspect, DiseaseRecord};

const FOOTER: &str =
    "💬 Ask me about specific aspects like 'home treatment for asthma' or 'causes of baldness'!";

const DISCLAIMER: &str = "This information is for educational purposes only.\n\
    Please consult with healthcare professionals for proper diagnosis and treatment.";

/// Fixed reply when a disease is not in the knowledge base.
pub fn not_found(name: &str) -> String {
    format!(
        "❌ Sorry, I couldn't find information about '{name}'. \
         Please check the spelling or try another disease name."
    )
}

/// Reply when no disease could be resolved from the query at all.
pub fn no_disease_found(available: &[&str]) -> String {
    format!(
        "❌ I couldn't find a matching disease. Available diseases include:\n{}\n\n\
         💡 Try asking: 'Tell me about asthma' or 'Home treatment for acne'",
        available.join(", ")
    )
}

/// Render a record for an intent, walking the intent's aspect priority
/// list and skipping absent aspects.
pub fn format(record: Option<&DiseaseRecord>, intent: IntentKind, name: &str) -> String {
    let Some(record) = record else {
        return not_found(name);
    };

    let mut parts: Vec<String> = Vec::new();
    match intent {
        IntentKind::Overview | IntentKind::Comprehensive => {
            parts.push(format!("🏥 **Complete Information about {}**\n", record.name));
        }
        _ => parts.push(format!("🔍 **{} for {}**\n", intent.title(), record.name)),
    }

    for aspect in intent.priority() {
        if let Some(text) = record.aspect(aspect) {
            parts.push(format!("\n{} **{}**", aspect.emoji(), aspect.title()));
            parts.push(text.to_string());
        }
    }

    parts.push(format!("\n{}", "=".repeat(50)));
    parts.push(FOOTER.to_string());
    parts.join("\n")
}

/// Render every aspect in the fixed canonical order, with a disclaimer
/// block and example follow-ups. Used for "tell me everything" queries.
pub fn render_comprehensive(record: Option<&DiseaseRecord>, name: &str) -> String {
    let Some(record) = record else {
        return not_found(name);
    };

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!(
        "📚 **COMPREHENSIVE INFORMATION ABOUT {}** 📚\n",
        record.name.to_uppercase()
    ));
    parts.push(format!("{}\n", "=".repeat(60)));

    for aspect in Aspect::ALL {
        if let Some(text) = record.aspect(aspect) {
            parts.push(format!("\n{} **{}**", aspect.emoji(), aspect.title().to_uppercase()));
            parts.push("-".repeat(40));
            parts.push(format!("{text}\n"));
        }
    }

    parts.push(format!("\n{}", "=".repeat(60)));
    parts.push("\n🩺 **IMPORTANT NOTE:**".to_string());
    parts.push(DISCLAIMER.to_string());
    parts.push("\n💬 You can ask me about specific aspects like:".to_string());
    parts.push(format!("• 'Home treatment for {}'", record.name));
    parts.push(format!("• 'Causes of {}'", record.name));
    parts.push(format!("• 'Prevention of {}'", record.name));
    parts.join("\n")
}

/// One labeled aspect, or `None` when the record lacks it so the caller
/// can fall back to suggestions.
pub fn format_aspect(record: &DiseaseRecord, aspect: Aspect) -> Option<String> {
    let text = record.aspect(aspect)?;
    Some(format!(
        "{} **{} {} {}:**\n\n{}",
        aspect.emoji(),
        aspect.title(),
        aspect_connector(aspect),
        title_case(&record.name),
        text
    ))
}

/// Menu of askable aspects for a disease the user has picked but not
/// qualified yet.
pub fn suggest_aspects(record: &DiseaseRecord) -> String {
    format!(
        "I can help with {}! What would you like to know about it?\n\n\
         • **🏠 Home treatments** - Natural remedies and traditional treatments\n\
         • **⚠️ Symptoms** - Signs and symptoms to look for\n\
         • **🔍 Causes** - What causes this condition\n\
         • **🛡️ Prevention** - How to prevent or avoid it\n\
         • **💡 Awareness** - Important facts and awareness\n\
         • **🏛️ WHO Guidelines** - Official health organization recommendations\n\n\
         Just tell me what aspect interests you most!",
        title_case(&record.name)
    )
}

/// Side-by-side symptom and cause comparison of two records.
pub fn format_comparison(a: &DiseaseRecord, b: &DiseaseRecord) -> String {
    let mut parts = vec![format!(
        "🔍 **Comparison between {} and {}:**\n",
        title_case(&a.name),
        title_case(&b.name)
    )];

    for aspect in [Aspect::Symptoms, Aspect::Causes] {
        if let (Some(text_a), Some(text_b)) = (a.aspect(aspect), b.aspect(aspect)) {
            parts.push(format!("**{} {}:**", aspect.emoji(), aspect.title()));
            parts.push(format!("• **{}:** {}", title_case(&a.name), excerpt(text_a)));
            parts.push(format!("• **{}:** {}\n", title_case(&b.name), excerpt(text_b)));
        }
    }

    parts.push(format!(
        "Would you like detailed information about any specific aspect of {} or {}?",
        a.name, b.name
    ));
    parts.join("\n")
}

/// First 100 characters of a text, elided when longer.
fn excerpt(text: &str) -> String {
    let mut taken: String = text.chars().take(100).collect();
    if taken.len() < text.len() {
        taken.push_str("...");
    }
    taken
}

/// Capitalize each whitespace-separated word.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn aspect_connector(aspect: Aspect) -> &'static str {
    match aspect {
        Aspect::Overview | Aspect::Causes | Aspect::Symptoms => "of",
        Aspect::Awareness => "about",
        Aspect::Precautions | Aspect::HomeTreatment | Aspect::WhoGuidelines => "for",
    }
}
