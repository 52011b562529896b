//! Keyword Classifier
//!
//! One classifier for every feature. A `TierTable` lists ordered rules; the
//! first rule whose trigger fires decides the tier, and the table's default
//! rule applies when nothing fires. Symptom urgency and product health
//! rating are both expressed as tables in `crate::catalog`.

use crate::alternatives::AlternativesTable;

/// Named set of lowercase substrings.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(name: &'static str, terms: &'static [&'static str]) -> Self {
        Self { name, terms }
    }

    /// `text` must already be lowercased.
    pub fn matches(&self, text: &str) -> bool {
        self.terms.iter().any(|term| text.contains(term))
    }

    /// Terms present in `text`, in definition order.
    pub fn matched_terms(&self, text: &str) -> Vec<&'static str> {
        self.terms
            .iter()
            .copied()
            .filter(|term| text.contains(term))
            .collect()
    }
}

/// Condition under which a tier rule fires.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Any term of the set is present.
    Any(KeywordSet),
    /// A term of the primary set co-occurs with a term of any companion set.
    Combined {
        primary: KeywordSet,
        companions: &'static [KeywordSet],
    },
    /// At least `threshold` of the categories have a term present.
    CategoryCount {
        categories: &'static [KeywordSet],
        threshold: usize,
    },
}

impl Trigger {
    /// Returns the evidence that fired the trigger, or `None`.
    fn evaluate(&self, text: &str) -> Option<Vec<&'static str>> {
        match self {
            Trigger::Any(set) => {
                let terms = set.matched_terms(text);
                (!terms.is_empty()).then_some(terms)
            }
            Trigger::Combined { primary, companions } => {
                let mut terms = primary.matched_terms(text);
                if terms.is_empty() {
                    return None;
                }
                let companion_terms: Vec<&'static str> = companions
                    .iter()
                    .flat_map(|set| set.matched_terms(text))
                    .collect();
                if companion_terms.is_empty() {
                    return None;
                }
                terms.extend(companion_terms);
                Some(terms)
            }
            Trigger::CategoryCount { categories, threshold } => {
                let present: Vec<&'static str> = categories
                    .iter()
                    .filter(|set| set.matches(text))
                    .map(|set| set.name)
                    .collect();
                (present.len() >= *threshold).then_some(present)
            }
        }
    }
}

/// One tier of a table, with the canned text attached to it.
#[derive(Debug)]
pub struct TierRule<T: 'static> {
    pub tier: T,
    /// `None` only for a table's default rule.
    pub trigger: Option<Trigger>,
    pub concerns: &'static [&'static str],
    /// Returned when the alternatives table has no matching key.
    pub fallback: &'static [&'static str],
    /// Whether the alternatives table is consulted for this tier at all.
    pub consult_alternatives: bool,
}

#[derive(Debug)]
pub struct TierTable<T: 'static> {
    pub rules: &'static [TierRule<T>],
    pub default: TierRule<T>,
    pub alternatives: AlternativesTable,
}

#[derive(Debug)]
pub struct Classification<'a, T: 'static> {
    pub tier: T,
    pub rule: &'a TierRule<T>,
    /// Terms or category names that fired the rule. Empty for the default.
    pub evidence: Vec<&'static str>,
}

impl<T: Copy> TierTable<T> {
    /// Classify lowercased text. Total: always yields exactly one tier.
    pub fn classify(&self, text: &str) -> Classification<'_, T> {
        for rule in self.rules {
            let Some(trigger) = &rule.trigger else {
                continue;
            };
            if let Some(evidence) = trigger.evaluate(text) {
                return Classification {
                    tier: rule.tier,
                    rule,
                    evidence,
                };
            }
        }

        Classification {
            tier: self.default.tier,
            rule: &self.default,
            evidence: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Low,
        Mid,
        High,
    }

    const RED: KeywordSet = KeywordSet::new("red", &["red", "crimson"]);
    const BLUE: KeywordSet = KeywordSet::new("blue", &["blue"]);
    const GREEN: KeywordSet = KeywordSet::new("green", &["green"]);
    const ALARM: KeywordSet = KeywordSet::new("alarm", &["alarm"]);
    const COLOURS: &[KeywordSet] = &[RED, BLUE, GREEN];

    static TABLE: TierTable<Level> = TierTable {
        rules: &[
            TierRule {
                tier: Level::High,
                trigger: Some(Trigger::Any(ALARM)),
                concerns: &[],
                fallback: &["run"],
                consult_alternatives: false,
            },
            TierRule {
                tier: Level::Mid,
                trigger: Some(Trigger::Combined {
                    primary: RED,
                    companions: &[BLUE],
                }),
                concerns: &[],
                fallback: &["look"],
                consult_alternatives: false,
            },
            TierRule {
                tier: Level::Mid,
                trigger: Some(Trigger::CategoryCount {
                    categories: COLOURS,
                    threshold: 3,
                }),
                concerns: &[],
                fallback: &["look"],
                consult_alternatives: false,
            },
        ],
        default: TierRule {
            tier: Level::Low,
            trigger: None,
            concerns: &[],
            fallback: &["relax"],
            consult_alternatives: false,
        },
        alternatives: AlternativesTable::EMPTY,
    };

    #[test]
    fn test_first_matching_rule_wins() {
        let c = TABLE.classify("alarm with red and blue");
        assert_eq!(c.tier, Level::High);
        assert_eq!(c.evidence, vec!["alarm"]);
    }

    #[test]
    fn test_combined_requires_both_sides() {
        assert_eq!(TABLE.classify("red only").tier, Level::Low);
        let c = TABLE.classify("crimson and blue");
        assert_eq!(c.tier, Level::Mid);
        assert_eq!(c.evidence, vec!["crimson", "blue"]);
    }

    #[test]
    fn test_category_count_threshold() {
        assert_eq!(TABLE.classify("blue green").tier, Level::Low);
        let c = TABLE.classify("green red blue");
        assert_eq!(c.tier, Level::Mid);
    }

    #[test]
    fn test_default_rule_when_nothing_fires() {
        let c = TABLE.classify("nothing here");
        assert_eq!(c.tier, Level::Low);
        assert!(c.evidence.is_empty());
        assert_eq!(c.rule.fallback, &["relax"]);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let a = TABLE.classify("red blue green");
        let b = TABLE.classify("red blue green");
        assert_eq!(a.tier, b.tier);
        assert_eq!(a.evidence, b.evidence);
    }
}
