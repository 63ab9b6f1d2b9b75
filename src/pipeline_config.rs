use serde::{Deserialize, Serialize};

/// Tuning knobs for the classification pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Batches larger than this run intent detection in parallel.
    pub parallel_batch_threshold: usize,
    /// Hard cap on keywords accepted per request.
    pub max_keywords_per_request: usize,
    /// Group size used by the placeholder clusterer.
    pub cluster_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel_batch_threshold: 1_000,
            max_keywords_per_request: 100_000,
            cluster_size: 2,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Small interactive batches typed into the UI.
    pub fn interactive() -> Self {
        Self {
            max_keywords_per_request: 10_000,
            ..Default::default()
        }
    }

    /// Large uploaded keyword exports.
    pub fn bulk_processing() -> Self {
        Self {
            parallel_batch_threshold: 500,
            max_keywords_per_request: 1_000_000,
            ..Default::default()
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_batch_threshold = threshold.max(1);
        self
    }

    pub fn with_keyword_limit(mut self, limit: usize) -> Self {
        self.max_keywords_per_request = limit.max(1);
        self
    }

    pub fn with_cluster_size(mut self, size: usize) -> Self {
        self.cluster_size = size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.parallel_batch_threshold, 1_000);
        assert_eq!(config.max_keywords_per_request, 100_000);
        assert_eq!(config.cluster_size, 2);
    }

    #[test]
    fn test_interactive_config() {
        let config = PipelineConfig::interactive();
        assert_eq!(config.max_keywords_per_request, 10_000);
    }

    #[test]
    fn test_bulk_config() {
        let config = PipelineConfig::bulk_processing();
        assert_eq!(config.parallel_batch_threshold, 500);
        assert_eq!(config.max_keywords_per_request, 1_000_000);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_parallel_threshold(50)
            .with_keyword_limit(500)
            .with_cluster_size(3);

        assert_eq!(config.parallel_batch_threshold, 50);
        assert_eq!(config.max_keywords_per_request, 500);
        assert_eq!(config.cluster_size, 3);
    }

    #[test]
    fn test_builder_floors_at_one() {
        let config = PipelineConfig::new()
            .with_parallel_threshold(0)
            .with_cluster_size(0);

        assert_eq!(config.parallel_batch_threshold, 1);
        assert_eq!(config.cluster_size, 1);
    }
}
