// Analysis module - fingerprint extraction and comparison
//
// Pipeline: PCM samples → FeatureExtractor → AudioFeatures → FeatureComparator → score
//
// Both stages are pure, synchronous computations. Decoding the audio that
// feeds the extractor lives outside this module (see `crate::decode`).

pub mod comparator;
pub mod features;

pub use comparator::{FeatureComparator, FeatureSimilarities, SimilarityBreakdown};
pub use features::{AudioFeatures, FeatureExtractor, FFT_SIZE};
