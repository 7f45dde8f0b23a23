// Comparator - weighted similarity between two audio fingerprints
//
// This module scores how alike two AudioFeatures records are. Five
// per-feature similarities, each in [0, 1], are blended with fixed weights
// and the blend is scaled by a penalty for differing clip durations.
//
// Similarity terms:
// 1. Waveform: mean of 1 - |x - y| over nearest-index aligned samples
// 2. Energy: relative closeness of RMS amplitudes
// 3. Zero-crossing rate: relative closeness of crossings per second
// 4. Spectral Centroid: relative closeness in Hz
// 5. Spectral Flatness: relative closeness of the flatness ratios

use serde::{Deserialize, Serialize};

use crate::analysis::features::AudioFeatures;
use crate::config::SimilarityWeights;

/// Per-feature similarities, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSimilarities {
    pub waveform: f32,
    pub energy: f32,
    pub zero_crossing_rate: f32,
    pub spectral_centroid: f32,
    pub spectral_flatness: f32,
}

/// Every intermediate value of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    pub similarities: FeatureSimilarities,
    /// Weighted sum of the five similarities
    pub weighted_total: f32,
    /// Scale factor for differing durations, in [0, 1]
    pub duration_penalty: f32,
    /// `weighted_total * duration_penalty`, clamped to [0, 1]
    pub score: f32,
}

/// FeatureComparator blends per-feature similarities into one score
///
/// The weights are fixed at construction. The comparator holds no other
/// state, so `compare` is symmetric and safe to call from any thread.
#[derive(Debug, Clone, Default)]
pub struct FeatureComparator {
    weights: SimilarityWeights,
}

impl FeatureComparator {
    /// Create a comparator with the given weighting
    ///
    /// Weights are expected to pass [`SimilarityWeights::validate`]; debug
    /// builds assert it. Release builds use them as given.
    pub fn new(weights: SimilarityWeights) -> Self {
        debug_assert!(
            weights.validate().is_ok(),
            "similarity weights must be >= 0 and sum to 1 (got {:?})",
            weights
        );
        Self { weights }
    }

    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Similarity score in [0, 1]
    pub fn compare(&self, a: &AudioFeatures, b: &AudioFeatures) -> f32 {
        self.breakdown(a, b).score
    }

    /// Compute every term of the comparison
    pub fn breakdown(&self, a: &AudioFeatures, b: &AudioFeatures) -> SimilarityBreakdown {
        let similarities = FeatureSimilarities {
            waveform: waveform_similarity(&a.waveform, &b.waveform),
            energy: relative_closeness(a.energy, b.energy),
            zero_crossing_rate: relative_closeness(
                a.zero_crossing_rate(),
                b.zero_crossing_rate(),
            ),
            spectral_centroid: relative_closeness(a.spectral_centroid, b.spectral_centroid),
            spectral_flatness: relative_closeness(a.spectral_flatness, b.spectral_flatness),
        };

        let weighted_total = self.weigh(&similarities);
        let duration_penalty = duration_penalty(a.duration, b.duration);
        let score = (weighted_total * duration_penalty).clamp(0.0, 1.0);

        tracing::debug!(
            "[FeatureComparator] similarities={:?}, total={:.4}, penalty={:.4}, score={:.4}",
            similarities,
            weighted_total,
            duration_penalty,
            score
        );

        SimilarityBreakdown {
            similarities,
            weighted_total,
            duration_penalty,
            score,
        }
    }

    fn weigh(&self, s: &FeatureSimilarities) -> f32 {
        let w = &self.weights;
        w.waveform * s.waveform
            + w.energy * s.energy
            + w.zero_crossing_rate * s.zero_crossing_rate
            + w.spectral_centroid * s.spectral_centroid
            + w.spectral_flatness * s.spectral_flatness
    }
}

/// `1 - |x - y| / max(|x|, |y|)`, or 1 when both values are zero
pub fn relative_closeness(x: f32, y: f32) -> f32 {
    let max_value = x.abs().max(y.abs());
    if max_value == 0.0 {
        return 1.0;
    }
    (1.0 - (x - y).abs() / max_value).clamp(0.0, 1.0)
}

/// Mean pointwise similarity of two waveforms
///
/// Both waveforms are subsampled to the shorter length by taking, for
/// output position `i`, the sample at `floor(i * len / target)`. Each pair
/// contributes `1 - |x - y|`; the mean is clamped to [0, 1] since
/// opposite-phase pairs contribute down to -1.
///
/// Two empty waveforms are identical (1.0); one empty waveform shares
/// nothing with a non-empty one (0.0).
pub fn waveform_similarity(a: &[f32], b: &[f32]) -> f32 {
    let target = a.len().min(b.len());
    if target == 0 {
        return if a.len() == b.len() { 1.0 } else { 0.0 };
    }

    let total: f64 = (0..target)
        .map(|i| {
            let x = a[i * a.len() / target];
            let y = b[i * b.len() / target];
            1.0 - (x as f64 - y as f64).abs()
        })
        .sum();

    (total / target as f64).clamp(0.0, 1.0) as f32
}

/// `max(0, 1 - |a - b| / max(a, b))`
///
/// Returns 1 when both durations are zero so the guard never yields NaN.
pub fn duration_penalty(a: f32, b: f32) -> f32 {
    let longest = a.max(b);
    if longest <= 0.0 {
        return 1.0;
    }
    (1.0 - (a - b).abs() / longest).max(0.0)
}

#[cfg(test)]
#[path = "comparator_tests.rs"]
mod tests;
