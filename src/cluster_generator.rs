/// Placeholder keyword clustering
///
/// Groups keywords into fixed-size clusters by input position and labels
/// each cluster with its primary keyword's intent. This is a demo-data
/// generator for the UI, not similarity-based clustering: embeddings are
/// deterministic stand-ins and `shared_urls` stays empty because no SERP
/// data is fetched.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::intent_detector::{IntentDetector, IntentLabel};

const EMBEDDING_DIM: usize = 50;

/// One positional keyword group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCluster {
    pub cluster_id: usize,
    pub primary_keyword: String,
    pub keywords: Vec<String>,
    pub total_volume: u64,
    pub intent: IntentLabel,
    pub cluster_size: usize,
    pub shared_urls: Vec<String>,
}

pub struct KeywordClusterer {
    detector: IntentDetector,
    cluster_size: usize,
}

impl KeywordClusterer {
    pub fn new() -> Self {
        Self::with_cluster_size(2)
    }

    pub fn with_cluster_size(cluster_size: usize) -> Self {
        Self {
            detector: IntentDetector::new(),
            cluster_size: cluster_size.max(1),
        }
    }

    /// Group normalized records into fixed-size clusters by position.
    pub fn cluster(&self, records: &[(String, u64)]) -> Vec<KeywordCluster> {
        records
            .chunks(self.cluster_size)
            .enumerate()
            .map(|(cluster_id, group)| {
                let primary_keyword = group[0].0.clone();
                KeywordCluster {
                    cluster_id,
                    intent: self.detector.detect(&primary_keyword),
                    keywords: group.iter().map(|(keyword, _)| keyword.clone()).collect(),
                    total_volume: group.iter().map(|(_, volume)| volume).sum(),
                    cluster_size: group.len(),
                    shared_urls: Vec::new(),
                    primary_keyword,
                }
            })
            .collect()
    }
}

impl Default for KeywordClusterer {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic stand-in embeddings, one vector per keyword.
pub fn mock_embeddings(count: usize) -> Vec<Vec<f32>> {
    (0..count)
        .map(|i| {
            (0..EMBEDDING_DIM)
                .map(|j| ((i + j) % 10) as f32 / 10.0)
                .collect()
        })
        .collect()
}

/// Jaccard similarity between two result-URL lists.
pub fn serp_similarity(urls1: &[String], urls2: &[String]) -> f64 {
    if urls1.is_empty() || urls2.is_empty() {
        return 0.0;
    }

    let a: HashSet<&str> = urls1.iter().map(String::as_str).collect();
    let b: HashSet<&str> = urls2.iter().map(String::as_str).collect();

    let intersection = a.intersection(&b).count();
    let union = a.union(&b).count();

    intersection as f64 / union as f64
}

/// Cosine similarity between two vectors. Zero-magnitude inputs divide by 1.
pub fn cosine_similarity(v1: &[f32], v2: &[f32]) -> f32 {
    let dot: f32 = v1.iter().zip(v2).map(|(a, b)| a * b).sum();
    let mag1 = v1.iter().map(|a| a * a).sum::<f32>().sqrt();
    let mag2 = v2.iter().map(|a| a * a).sum::<f32>().sqrt();

    let denom = mag1 * mag2;
    if denom == 0.0 {
        dot
    } else {
        dot / denom
    }
}
