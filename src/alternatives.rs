//! Alternative/Concern Resolver
//!
//! Maps trigger keywords to suggestion lists. Lookup scans entries in
//! definition order and the first key contained in the input wins, so
//! table order is part of the data.

use crate::classifier::{Classification, TierTable};

/// Returned only if a tier was configured without a fallback list.
const LAST_RESORT: &[&str] = &["Consult a qualified professional for personalised advice"];

/// Ordered trigger keyword → alternatives mapping.
#[derive(Debug, Clone, Copy)]
pub struct AlternativesTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl AlternativesTable {
    pub const EMPTY: AlternativesTable = AlternativesTable { entries: &[] };

    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// First entry whose key occurs in the lowercased `text`.
    pub fn lookup(&self, text: &str) -> Option<(&'static str, &'static [&'static str])> {
        self.entries
            .iter()
            .copied()
            .find(|(key, _)| text.contains(key))
    }
}

/// Alternatives for a classified input. Never empty.
pub fn resolve<T: Copy>(
    table: &TierTable<T>,
    classification: &Classification<'_, T>,
    text: &str,
) -> Vec<String> {
    let rule = classification.rule;

    let matched = if rule.consult_alternatives {
        table.alternatives.lookup(text).map(|(_, alts)| alts)
    } else {
        None
    };

    let list = match matched {
        Some(alts) if !alts.is_empty() => alts,
        _ if !rule.fallback.is_empty() => rule.fallback,
        _ => LAST_RESORT,
    };

    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{KeywordSet, TierRule, Trigger};

    static TABLE: TierTable<u8> = TierTable {
        rules: &[TierRule {
            tier: 2,
            trigger: Some(Trigger::Any(KeywordSet::new("snack", &["chips", "crisps"]))),
            concerns: &[],
            fallback: &["fruit"],
            consult_alternatives: true,
        }],
        default: TierRule {
            tier: 0,
            trigger: None,
            concerns: &[],
            fallback: &[],
            consult_alternatives: false,
        },
        alternatives: AlternativesTable::new(&[
            ("potato", &["sweet potato wedges"]),
            ("chips", &["makhana", "roasted chana"]),
        ]),
    };

    #[test]
    fn test_first_key_in_definition_order_wins() {
        let text = "potato chips";
        let c = TABLE.classify(text);
        assert_eq!(resolve(&TABLE, &c, text), vec!["sweet potato wedges"]);
    }

    #[test]
    fn test_verbatim_list_for_matching_key() {
        let text = "salted chips";
        let c = TABLE.classify(text);
        assert_eq!(resolve(&TABLE, &c, text), vec!["makhana", "roasted chana"]);
    }

    #[test]
    fn test_tier_fallback_without_key() {
        let text = "crisps";
        let c = TABLE.classify(text);
        assert_eq!(resolve(&TABLE, &c, text), vec!["fruit"]);
    }

    #[test]
    fn test_never_empty() {
        let text = "water";
        let c = TABLE.classify(text);
        assert_eq!(resolve(&TABLE, &c, text), vec![LAST_RESORT[0]]);
    }

    #[test]
    fn test_lookup_misses() {
        assert!(TABLE.alternatives.lookup("tea").is_none());
        assert!(AlternativesTable::EMPTY.lookup("chips").is_none());
    }
}
