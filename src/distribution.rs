use serde::{Deserialize, Serialize};

use crate::intent_detector::IntentLabel;

/// Per-intent keyword counts.
///
/// All four labels are always present so the wire shape is stable even when
/// a bucket is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentDistribution {
    #[serde(rename = "Informational")]
    pub informational: usize,
    #[serde(rename = "Transactional")]
    pub transactional: usize,
    #[serde(rename = "Commercial")]
    pub commercial: usize,
    #[serde(rename = "Navigational")]
    pub navigational: usize,
}

impl IntentDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one keyword under the given label.
    pub fn add(&mut self, intent: IntentLabel) {
        *self.count_mut(intent) += 1;
    }

    pub fn get_count(&self, intent: IntentLabel) -> usize {
        match intent {
            IntentLabel::Informational => self.informational,
            IntentLabel::Transactional => self.transactional,
            IntentLabel::Commercial => self.commercial,
            IntentLabel::Navigational => self.navigational,
        }
    }

    fn count_mut(&mut self, intent: IntentLabel) -> &mut usize {
        match intent {
            IntentLabel::Informational => &mut self.informational,
            IntentLabel::Transactional => &mut self.transactional,
            IntentLabel::Commercial => &mut self.commercial,
            IntentLabel::Navigational => &mut self.navigational,
        }
    }

    pub fn total(&self) -> usize {
        self.informational + self.transactional + self.commercial + self.navigational
    }

    /// Get the fraction of keywords per label.
    /// Pre-calculates the inverse so per-label division becomes multiplication.
    pub fn get_distribution(&self) -> Vec<(IntentLabel, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        let inv_total = 1.0 / total as f64;

        IntentLabel::ALL
            .iter()
            .map(|&label| (label, self.get_count(label) as f64 * inv_total))
            .collect()
    }

    /// Merge another distribution into this one.
    pub fn merge(&mut self, other: &IntentDistribution) {
        self.informational += other.informational;
        self.transactional += other.transactional;
        self.commercial += other.commercial;
        self.navigational += other.navigational;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut dist = IntentDistribution::new();
        dist.add(IntentLabel::Commercial);
        dist.add(IntentLabel::Commercial);
        dist.add(IntentLabel::Transactional);

        assert_eq!(dist.total(), 3);
        assert_eq!(dist.get_count(IntentLabel::Commercial), 2);
        assert_eq!(dist.get_count(IntentLabel::Transactional), 1);
        assert_eq!(dist.get_count(IntentLabel::Informational), 0);
    }

    #[test]
    fn test_fractions() {
        let mut dist = IntentDistribution::new();
        dist.add(IntentLabel::Informational);
        dist.add(IntentLabel::Informational);
        dist.add(IntentLabel::Commercial);
        dist.add(IntentLabel::Navigational);

        let fractions = dist.get_distribution();
        assert_eq!(fractions.len(), 4);

        let get = |label: IntentLabel| {
            fractions
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, f)| *f)
                .unwrap()
        };
        assert_eq!(get(IntentLabel::Informational), 0.5);
        assert_eq!(get(IntentLabel::Commercial), 0.25);
        assert_eq!(get(IntentLabel::Transactional), 0.0);
    }

    #[test]
    fn test_empty_distribution() {
        assert!(IntentDistribution::new().get_distribution().is_empty());
    }

    #[test]
    fn test_merge() {
        let mut a = IntentDistribution::new();
        a.add(IntentLabel::Commercial);
        a.add(IntentLabel::Informational);

        let mut b = IntentDistribution::new();
        b.add(IntentLabel::Commercial);
        b.add(IntentLabel::Navigational);

        a.merge(&b);

        assert_eq!(a.total(), 4);
        assert_eq!(a.get_count(IntentLabel::Commercial), 2);
        assert_eq!(a.get_count(IntentLabel::Navigational), 1);
    }

    #[test]
    fn test_serialized_keys_are_label_names() {
        let json = serde_json::to_value(IntentDistribution::new()).unwrap();
        for label in IntentLabel::ALL {
            assert!(json.get(label.as_str()).is_some());
        }
    }
}
