/// Search-intent detection for keywords
///
/// Assigns each keyword one of four intent labels via case-insensitive
/// substring rules, evaluated in fixed priority order (first match wins):
/// 1. "best" → Commercial
/// 2. buy/price/purchase/order/shop/cost → Transactional
/// 3. login/website/site/official/app/web → Navigational
/// 4. no trigger → Informational
///
/// The ordering is part of the API contract: "best" outranks the
/// transactional and navigational groups even when trigger words co-occur.
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed search-intent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentLabel {
    Informational,
    Transactional,
    Commercial,
    Navigational,
}

impl IntentLabel {
    /// All labels, in the order the API reports them.
    pub const ALL: [IntentLabel; 4] = [
        IntentLabel::Informational,
        IntentLabel::Transactional,
        IntentLabel::Commercial,
        IntentLabel::Navigational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::Informational => "Informational",
            IntentLabel::Transactional => "Transactional",
            IntentLabel::Commercial => "Commercial",
            IntentLabel::Navigational => "Navigational",
        }
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Trigger groups, listed in rule-priority order.
const COMMERCIAL_TRIGGERS: &[&str] = &["best"];

const TRANSACTIONAL_TRIGGERS: &[&str] = &["buy", "price", "purchase", "order", "shop", "cost"];

const NAVIGATIONAL_TRIGGERS: &[&str] = &["login", "website", "site", "official", "app", "web"];

/// Substring-based intent detector.
///
/// One case-insensitive automaton per trigger group; groups are checked in
/// priority order and the first group with any match decides the label.
pub struct IntentDetector {
    rules: Vec<(AhoCorasick, IntentLabel)>,
}

impl IntentDetector {
    pub fn new() -> Self {
        let groups: [(&[&str], IntentLabel); 3] = [
            (COMMERCIAL_TRIGGERS, IntentLabel::Commercial),
            (TRANSACTIONAL_TRIGGERS, IntentLabel::Transactional),
            (NAVIGATIONAL_TRIGGERS, IntentLabel::Navigational),
        ];

        let rules = groups
            .iter()
            .map(|&(triggers, label)| {
                let automaton = AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(triggers)
                    .expect("trigger terms are valid patterns");
                (automaton, label)
            })
            .collect();

        Self { rules }
    }

    /// Detect the intent of a single keyword.
    ///
    /// Total and deterministic: every keyword gets exactly one label, and
    /// keywords with no trigger substring default to Informational.
    pub fn detect(&self, keyword: &str) -> IntentLabel {
        for (automaton, label) in &self.rules {
            if automaton.is_match(keyword) {
                return *label;
            }
        }
        IntentLabel::Informational
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_DETECTOR: Lazy<IntentDetector> = Lazy::new(IntentDetector::new);

/// Detect intent with the shared default detector.
pub fn detect_intent(keyword: &str) -> IntentLabel {
    DEFAULT_DETECTOR.detect(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commercial_outranks_transactional() {
        // Contains both "best" and "buy"/"price"; rule 1 wins.
        assert_eq!(
            detect_intent("best price to buy shoes"),
            IntentLabel::Commercial
        );
    }

    #[test]
    fn test_transactional() {
        assert_eq!(
            detect_intent("how to buy nike shoes"),
            IntentLabel::Transactional
        );
        assert_eq!(detect_intent("iphone 15 cost"), IntentLabel::Transactional);
    }

    #[test]
    fn test_navigational() {
        assert_eq!(detect_intent("nike official site"), IntentLabel::Navigational);
        assert_eq!(detect_intent("gmail login"), IntentLabel::Navigational);
    }

    #[test]
    fn test_informational_default() {
        assert_eq!(detect_intent("nike shoes guide"), IntentLabel::Informational);
        assert_eq!(detect_intent(""), IntentLabel::Informational);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_intent("BEST running shoes"), IntentLabel::Commercial);
        assert_eq!(detect_intent("Buy Shoes"), IntentLabel::Transactional);
        assert_eq!(
            detect_intent("NIKE OFFICIAL SITE"),
            detect_intent("nike official site")
        );
    }

    #[test]
    fn test_deterministic() {
        let keyword = "best laptop under 500";
        assert_eq!(detect_intent(keyword), detect_intent(keyword));
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // Substring semantics, not word-boundary semantics: "weber grills"
        // contains "web" and lands in Navigational.
        assert_eq!(detect_intent("weber grills"), IntentLabel::Navigational);
    }

    #[test]
    fn test_label_strings() {
        for label in IntentLabel::ALL {
            assert_eq!(
                serde_json::to_string(&label).unwrap(),
                format!("\"{}\"", label.as_str())
            );
        }
    }
}
