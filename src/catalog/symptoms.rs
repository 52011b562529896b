//! Symptom categories and urgency rules

use crate::alternatives::AlternativesTable;
use crate::classifier::{KeywordSet, TierRule, TierTable, Trigger};
use crate::models::Urgency;

pub const RESPIRATORY: KeywordSet = KeywordSet::new(
    "respiratory",
    &["cough", "breathing", "short of breath", "shortness of breath", "wheeze"],
);

pub const DIGESTIVE: KeywordSet = KeywordSet::new(
    "digestive",
    &["stomach", "nausea", "vomit", "diarrhea", "constipation", "abdomen", "abdominal"],
);

pub const HEAD: KeywordSet = KeywordSet::new(
    "head",
    &["headache", "migraine", "dizziness", "vertigo", "head", "vision"],
);

pub const PAIN: KeywordSet = KeywordSet::new("pain", &["pain", "ache", "sore", "hurt", "aching"]);

pub const FEVER: KeywordSet = KeywordSet::new("fever", &["fever", "temperature", "chills", "sweating"]);

pub const SKIN: KeywordSet = KeywordSet::new(
    "skin",
    &["rash", "itchy", "itch", "skin", "hives", "red", "swelling"],
);

pub const EMERGENCY: KeywordSet = KeywordSet::new(
    "emergency",
    &[
        "chest pain",
        "cannot breathe",
        "unconscious",
        "passed out",
        "stroke",
        "numbness",
        "seizure",
        "allergic reaction",
    ],
);

/// Categories counted by the multi-category escalation rule.
pub const CATEGORIES: &[KeywordSet] = &[RESPIRATORY, DIGESTIVE, HEAD, PAIN, FEVER, SKIN];

/// Number of co-occurring categories that escalates to `Moderate`.
pub const CATEGORY_THRESHOLD: usize = 3;

const SEVERE_ADVICE: &[&str] = &[
    "Please seek immediate medical attention",
    "Consider visiting an emergency room or calling emergency services",
];

const MODERATE_ADVICE: &[&str] = &[
    "Consult with a healthcare provider within the next 24-48 hours",
    "These symptoms warrant professional evaluation",
];

const MILD_ADVICE: &[&str] = &[
    "Monitor your symptoms",
    "Rest, stay hydrated, and use over-the-counter medications as appropriate",
    "If symptoms worsen or persist for more than a few days, consult with a healthcare provider",
];

/// Precedence: emergency, then fever combined with respiratory or digestive,
/// then the category count. Reordering changes outcomes.
pub static SYMPTOM_TABLE: TierTable<Urgency> = TierTable {
    rules: &[
        TierRule {
            tier: Urgency::Severe,
            trigger: Some(Trigger::Any(EMERGENCY)),
            concerns: &[],
            fallback: SEVERE_ADVICE,
            consult_alternatives: false,
        },
        TierRule {
            tier: Urgency::Moderate,
            trigger: Some(Trigger::Combined {
                primary: FEVER,
                companions: &[RESPIRATORY, DIGESTIVE],
            }),
            concerns: &[],
            fallback: MODERATE_ADVICE,
            consult_alternatives: false,
        },
        TierRule {
            tier: Urgency::Moderate,
            trigger: Some(Trigger::CategoryCount {
                categories: CATEGORIES,
                threshold: CATEGORY_THRESHOLD,
            }),
            concerns: &[],
            fallback: MODERATE_ADVICE,
            consult_alternatives: false,
        },
    ],
    default: TierRule {
        tier: Urgency::Mild,
        trigger: None,
        concerns: &[],
        fallback: MILD_ADVICE,
        consult_alternatives: false,
    },
    alternatives: AlternativesTable::EMPTY,
};

/// Symptom terms found in lowercased text, deduplicated, first occurrence kept.
///
/// Pain terms are not listed individually; a fever-class term is reported
/// as the single entry "fever".
pub fn extract_symptoms(text: &str) -> Vec<String> {
    let mut found: Vec<&str> = Vec::new();

    found.extend(RESPIRATORY.matched_terms(text));
    if text.contains("cough") {
        if text.contains("dry") {
            found.push("dry cough");
        } else if text.contains("phlegm") || text.contains("mucus") {
            found.push("productive cough");
        }
    }

    found.extend(DIGESTIVE.matched_terms(text));
    found.extend(HEAD.matched_terms(text));

    if FEVER.matches(text) {
        found.push("fever");
    }

    found.extend(SKIN.matched_terms(text));

    let mut unique: Vec<String> = Vec::with_capacity(found.len());
    for term in found {
        if !unique.iter().any(|seen| seen == term) {
            unique.push(term.to_string());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urgency(text: &str) -> Urgency {
        SYMPTOM_TABLE.classify(&text.to_lowercase()).tier
    }

    #[test]
    fn test_emergency_is_severe() {
        assert_eq!(urgency("chest pain and dizziness"), Urgency::Severe);
        assert_eq!(urgency("Sudden NUMBNESS in my arm"), Urgency::Severe);
    }

    #[test]
    fn test_emergency_overrides_everything() {
        let text = "fever, cough, nausea, rash, headache and a seizure";
        assert_eq!(urgency(text), Urgency::Severe);
    }

    #[test]
    fn test_fever_with_respiratory_is_moderate() {
        assert_eq!(urgency("fever and a cough"), Urgency::Moderate);
        assert_eq!(urgency("chills with nausea"), Urgency::Moderate);
    }

    #[test]
    fn test_three_categories_is_moderate() {
        // head + pain + skin, no fever
        assert_eq!(urgency("headache, sore back and an itchy rash"), Urgency::Moderate);
    }

    #[test]
    fn test_two_categories_stay_mild() {
        assert_eq!(urgency("mild headache and a sore throat"), Urgency::Mild);
    }

    #[test]
    fn test_no_keyword_is_mild_with_advice() {
        let text = "feeling a bit off today";
        let c = SYMPTOM_TABLE.classify(text);
        assert_eq!(c.tier, Urgency::Mild);
        assert!(!c.rule.fallback.is_empty());
    }

    #[test]
    fn test_extract_symptoms_dedupes_and_labels_cough() {
        let found = extract_symptoms("dry cough, headache, fever and chills");
        assert_eq!(found, vec!["cough", "dry cough", "headache", "head", "fever"]);

        let productive = extract_symptoms("cough with mucus");
        assert!(productive.contains(&"productive cough".to_string()));
    }

    #[test]
    fn test_extract_symptoms_empty_without_match() {
        assert!(extract_symptoms("just exhausted").is_empty());
    }
}
