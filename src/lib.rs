// Audio Compare Core - clip fingerprinting and similarity scoring
// Pure feature extraction and weighted comparison over mono PCM buffers

// Module declarations
pub mod analysis;
pub mod api;
pub mod config;
pub mod decode;
pub mod error;

// Re-exports for convenience
pub use analysis::{AudioFeatures, FeatureComparator, FeatureExtractor, SimilarityBreakdown};
pub use api::*;
pub use config::{AppConfig, SimilarityWeights};
