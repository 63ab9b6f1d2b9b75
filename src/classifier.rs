/// Keyword classification and aggregation
///
/// Turns normalized (keyword, volume) pairs into intent-keyed buckets plus
/// summary statistics. Classification is total over normalized input: the
/// only failure modes are an empty batch and the per-request keyword cap.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::distribution::IntentDistribution;
use crate::error::ValidationError;
use crate::intent_detector::{IntentDetector, IntentLabel};
use crate::pipeline_config::PipelineConfig;

/// One classified keyword. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub volume: u64,
    pub intent: IntentLabel,
}

/// One ordered record list per intent label.
///
/// All four buckets are always present, each preserving input order, and
/// every record appears in exactly one bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentBuckets {
    #[serde(rename = "Informational")]
    pub informational: Vec<KeywordRecord>,
    #[serde(rename = "Transactional")]
    pub transactional: Vec<KeywordRecord>,
    #[serde(rename = "Commercial")]
    pub commercial: Vec<KeywordRecord>,
    #[serde(rename = "Navigational")]
    pub navigational: Vec<KeywordRecord>,
}

impl IntentBuckets {
    /// Append a record to the bucket its intent selects.
    pub fn push(&mut self, record: KeywordRecord) {
        match record.intent {
            IntentLabel::Informational => self.informational.push(record),
            IntentLabel::Transactional => self.transactional.push(record),
            IntentLabel::Commercial => self.commercial.push(record),
            IntentLabel::Navigational => self.navigational.push(record),
        }
    }

    pub fn get(&self, intent: IntentLabel) -> &[KeywordRecord] {
        match intent {
            IntentLabel::Informational => &self.informational,
            IntentLabel::Transactional => &self.transactional,
            IntentLabel::Commercial => &self.commercial,
            IntentLabel::Navigational => &self.navigational,
        }
    }

    /// Total records across all buckets.
    pub fn len(&self) -> usize {
        IntentLabel::ALL
            .iter()
            .map(|&label| self.get(label).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn distribution(&self) -> IntentDistribution {
        IntentDistribution {
            informational: self.informational.len(),
            transactional: self.transactional.len(),
            commercial: self.commercial.len(),
            navigational: self.navigational.len(),
        }
    }
}

/// Aggregate statistics over one classified batch.
///
/// `total_clusters` mirrors the browser API, which reports one cluster per
/// keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_keywords: usize,
    pub total_clusters: usize,
    pub total_volume: u64,
    pub intent_distribution: IntentDistribution,
}

/// Full result of one classification pass, shaped for the browser API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationOutcome {
    pub keywords_by_intent: IntentBuckets,
    pub stats: SummaryStats,
    /// Every classified record in input order.
    pub all_keywords: Vec<KeywordRecord>,
}

pub struct KeywordClassifier {
    detector: IntentDetector,
    config: PipelineConfig,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            detector: IntentDetector::new(),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Classify a normalized batch into buckets and summary statistics.
    pub fn classify(
        &self,
        records: &[(String, u64)],
    ) -> Result<ClassificationOutcome, ValidationError> {
        if records.is_empty() {
            return Err(ValidationError::NoKeywords);
        }
        if records.len() > self.config.max_keywords_per_request {
            return Err(ValidationError::TooManyKeywords {
                limit: self.config.max_keywords_per_request,
                actual: records.len(),
            });
        }

        let intents = self.detect_batch(records);

        let mut buckets = IntentBuckets::default();
        let mut all_keywords = Vec::with_capacity(records.len());
        let mut total_volume: u64 = 0;

        for ((keyword, volume), intent) in records.iter().zip(intents) {
            total_volume += *volume;
            let record = KeywordRecord {
                keyword: keyword.clone(),
                volume: *volume,
                intent,
            };
            tracing::debug!("Classified \"{}\" as {}", record.keyword, record.intent);
            buckets.push(record.clone());
            all_keywords.push(record);
        }

        let stats = SummaryStats {
            total_keywords: records.len(),
            total_clusters: records.len(),
            total_volume,
            intent_distribution: buckets.distribution(),
        };

        Ok(ClassificationOutcome {
            keywords_by_intent: buckets,
            stats,
            all_keywords,
        })
    }

    /// Detect intents for a batch, in parallel above the configured threshold.
    fn detect_batch(&self, records: &[(String, u64)]) -> Vec<IntentLabel> {
        if records.len() > self.config.parallel_batch_threshold {
            records
                .par_iter()
                .map(|(keyword, _)| self.detector.detect(keyword))
                .collect()
        } else {
            records
                .iter()
                .map(|(keyword, _)| self.detector.detect(keyword))
                .collect()
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}
