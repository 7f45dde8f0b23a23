// Types module - Data structures for audio features
//
// This module defines the fingerprint record produced by the extractor and
// consumed by the comparator.

use serde::{Deserialize, Serialize};

/// Features extracted from a mono audio clip
///
/// Produced once per extraction call and never mutated afterwards. Two
/// records with equal fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Input signal divided by its peak absolute amplitude
    ///
    /// Same length as the input buffer. All zeros when the input is silent.
    pub waveform: Vec<f32>,

    /// Root-mean-square amplitude of the original signal
    pub energy: f32,

    /// Number of sign changes between consecutive samples (0 counts as non-negative)
    pub zero_crossings: u64,

    /// Peak absolute sample value
    pub max_amplitude: f32,

    /// Spectral centroid in Hz (magnitude-weighted mean frequency)
    ///
    /// Computed from the first analysis window only.
    pub spectral_centroid: f32,

    /// Spectral flatness (0.0 to 1.0, geometric/arithmetic mean ratio)
    ///
    /// 0.0 = pure tone (e.g., sine wave)
    /// 1.0 = white noise
    pub spectral_flatness: f32,

    /// Clip length in seconds as reported by the decoder
    pub duration: f32,
}

impl AudioFeatures {
    /// Zero crossings per second of audio
    ///
    /// Returns 0 for a non-positive duration instead of dividing by zero.
    pub fn zero_crossing_rate(&self) -> f32 {
        if self.duration > 0.0 {
            self.zero_crossings as f32 / self.duration
        } else {
            0.0
        }
    }
}
