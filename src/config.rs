//! Configuration management for extraction and comparison parameters
//!
//! This module provides runtime configuration loading from JSON files so the
//! analysis window and the similarity weighting can be tuned without
//! recompilation. Every section has defaults matching the reference
//! behaviour; fields missing from the file keep their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::analysis::FFT_SIZE;
use crate::error::AnalysisError;

/// Tolerance applied when checking that the similarity weights sum to 1
const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub extraction: ExtractionConfig,
    pub comparison: ComparisonConfig,
}

/// Feature extraction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Analysis window length in samples (spectral features use only the first window)
    pub fft_size: usize,
    /// Offset added to every magnitude bin before the flatness ratio
    pub flatness_epsilon: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fft_size: FFT_SIZE,
            flatness_epsilon: 1e-6,
        }
    }
}

impl ExtractionConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        // The Hann window divides by (N - 1) and the spectrum keeps N / 2 bins
        if self.fft_size < 2 || self.fft_size % 2 != 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: format!("fft_size must be an even number >= 2 (got {})", self.fft_size),
            });
        }

        if !(self.flatness_epsilon.is_finite() && self.flatness_epsilon > 0.0) {
            return Err(AnalysisError::InvalidConfig {
                reason: format!(
                    "flatness_epsilon must be > 0 (got {})",
                    self.flatness_epsilon
                ),
            });
        }

        Ok(())
    }
}

/// Comparison parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub weights: SimilarityWeights,
}

/// Weight of each per-feature similarity in the blended score
///
/// The defaults sum to 1.0 so the blended score stays within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    pub waveform: f32,
    pub energy: f32,
    pub zero_crossing_rate: f32,
    pub spectral_centroid: f32,
    pub spectral_flatness: f32,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            waveform: 0.3,
            energy: 0.15,
            zero_crossing_rate: 0.15,
            spectral_centroid: 0.2,
            spectral_flatness: 0.2,
        }
    }
}

impl SimilarityWeights {
    /// Sum of all five weights
    pub fn total(&self) -> f32 {
        self.as_array().iter().sum()
    }

    fn as_array(&self) -> [f32; 5] {
        [
            self.waveform,
            self.energy,
            self.zero_crossing_rate,
            self.spectral_centroid,
            self.spectral_flatness,
        ]
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self
            .as_array()
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(AnalysisError::InvalidConfig {
                reason: format!("weights must be finite and >= 0 (got {:?})", self),
            });
        }

        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AnalysisError::InvalidConfig {
                reason: format!("weights must sum to 1.0 (got {})", total),
            });
        }

        Ok(())
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.extraction.validate()?;
        self.comparison.weights.validate()
    }

    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or the defaults if the file cannot be read,
    /// is not valid JSON, or fails validation
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                return Self::default();
            }
        };

        let config: Self = match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                return Self::default();
            }
        };

        match config.validate() {
            Ok(()) => {
                log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                config
            }
            Err(err) => {
                log::warn!(
                    "[Config] Rejected configuration from {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }
}
