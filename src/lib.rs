// Classification core
pub mod classifier;
pub mod distribution;
pub mod error;
pub mod intent_detector;
pub mod normalizer;
pub mod pipeline_config;

// Ingestion and service plumbing
pub mod cluster_generator; // Placeholder positional clustering for the UI
pub mod config;
pub mod csv_loader;
