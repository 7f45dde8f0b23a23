// Public API - one-call extraction and comparison with default settings
//
// Callers that need a custom window size or weighting build their own
// FeatureExtractor / FeatureComparator; these functions share process-wide
// defaults so the FFT is only planned once.

use once_cell::sync::Lazy;

use crate::analysis::{AudioFeatures, FeatureComparator, FeatureExtractor, SimilarityBreakdown};
use crate::error::AnalysisError;

// Re-export error code constants alongside the functions that raise them
pub use crate::error::AnalysisErrorCodes;

/// Default extractor (2048-sample window), planned on first use
static DEFAULT_EXTRACTOR: Lazy<FeatureExtractor> = Lazy::new(FeatureExtractor::new);

/// Default comparator (0.3 / 0.15 / 0.15 / 0.2 / 0.2 weighting)
static DEFAULT_COMPARATOR: Lazy<FeatureComparator> = Lazy::new(FeatureComparator::default);

/// Extract features from a mono clip using the default configuration
///
/// # Arguments
/// * `samples` - Mono PCM samples, nominally in [-1, 1]
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Clip length in seconds
///
/// # Errors
/// Invalid-input [`AnalysisError`] for an empty buffer, a non-finite sample,
/// or a sample rate or duration that is not > 0
pub fn extract_features(
    samples: &[f32],
    sample_rate: f32,
    duration: f32,
) -> Result<AudioFeatures, AnalysisError> {
    DEFAULT_EXTRACTOR.extract(samples, sample_rate, duration)
}

/// Similarity of two feature records in [0, 1] using the default weights
pub fn compare_features(a: &AudioFeatures, b: &AudioFeatures) -> f32 {
    DEFAULT_COMPARATOR.compare(a, b)
}

/// Full comparison breakdown using the default weights
pub fn compare_features_detailed(a: &AudioFeatures, b: &AudioFeatures) -> SimilarityBreakdown {
    DEFAULT_COMPARATOR.breakdown(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_then_compare() {
        let samples: Vec<f32> = (0..8000)
            .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 8000.0).sin())
            .collect();
        let features = extract_features(&samples, 8000.0, 1.0).unwrap();

        let score = compare_features(&features, &features);
        assert!((score - 1.0).abs() < 1e-6);
        assert_eq!(compare_features_detailed(&features, &features).score, score);
    }

    #[test]
    fn test_extract_rejects_empty_buffer() {
        let err = extract_features(&[], 44100.0, 1.0).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
