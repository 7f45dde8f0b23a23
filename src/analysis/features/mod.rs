// FeatureExtractor - fingerprint extraction for clip comparison
//
// This module turns a mono PCM buffer into an AudioFeatures record. Features
// are computed from time-domain and frequency-domain representations of the
// signal.
//
// Module organization:
// - types: Data structures (AudioFeatures struct)
// - fft: FFT computation with windowing
// - spectral: Frequency-domain features (centroid, flatness)
// - temporal: Time-domain features (energy, peak, zero crossings, normalization)
// - mod.rs: Coordinator (FeatureExtractor)
//
// Features extracted:
// 1. Normalized waveform: the input scaled by its peak amplitude
// 2. Energy: RMS amplitude over the whole clip
// 3. Zero crossings: sign changes over the whole clip
// 4. Spectral Centroid: weighted mean frequency of the first analysis window
// 5. Spectral Flatness: geometric / arithmetic mean of the same spectrum
//
// Only the first analysis window feeds the spectral features.

mod fft;
mod spectral;
mod temporal;
mod types;

pub use fft::FFT_SIZE;
pub use types::AudioFeatures;

use crate::config::ExtractionConfig;
use crate::error::AnalysisError;
use fft::FftProcessor;
use spectral::SpectralFeatures;

/// FeatureExtractor coordinates the feature extraction pipeline
///
/// Holds a pre-planned FFT and the spectral parameters. It has no mutable
/// state, so one extractor can serve concurrent calls.
pub struct FeatureExtractor {
    fft_processor: FftProcessor,
    spectral_features: SpectralFeatures,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    /// Create an extractor with the default 2048-sample window
    pub fn new() -> Self {
        let config = ExtractionConfig::default();
        Self::build(&config)
    }

    /// Create an extractor from a validated configuration
    pub fn with_config(config: &ExtractionConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &ExtractionConfig) -> Self {
        Self {
            fft_processor: FftProcessor::new(config.fft_size),
            spectral_features: SpectralFeatures::new(config.fft_size, config.flatness_epsilon),
        }
    }

    pub fn fft_size(&self) -> usize {
        self.fft_processor.fft_size()
    }

    /// Extract all features from a mono clip
    ///
    /// 1. Validate the inputs
    /// 2. Scan the samples for energy, peak and zero crossings
    /// 3. Normalize the waveform by the peak
    /// 4. Compute centroid and flatness from the first window's spectrum
    ///
    /// # Arguments
    /// * `samples` - Mono PCM samples, nominally in [-1, 1]
    /// * `sample_rate` - Sample rate in Hz
    /// * `duration` - Clip length in seconds as reported by the decoder
    ///
    /// # Errors
    /// Returns an invalid-input [`AnalysisError`] for an empty buffer, a
    /// non-finite sample, or a sample rate or duration that is not > 0
    pub fn extract(
        &self,
        samples: &[f32],
        sample_rate: f32,
        duration: f32,
    ) -> Result<AudioFeatures, AnalysisError> {
        validate_input(samples, sample_rate, duration)?;

        let stats = temporal::compute_stats(samples);
        let waveform = temporal::normalize_waveform(samples, stats.max_amplitude);

        let spectrum = self.fft_processor.compute_magnitude_spectrum(samples);
        let spectral_centroid = self
            .spectral_features
            .compute_centroid(&spectrum, sample_rate);
        let spectral_flatness = self.spectral_features.compute_flatness(&spectrum);

        tracing::debug!(
            "[FeatureExtractor] {} samples @ {} Hz: energy={:.4}, zc={}, peak={:.4}, centroid={:.1} Hz, flatness={:.4}",
            samples.len(),
            sample_rate,
            stats.energy,
            stats.zero_crossings,
            stats.max_amplitude,
            spectral_centroid,
            spectral_flatness
        );

        Ok(AudioFeatures {
            waveform,
            energy: stats.energy,
            zero_crossings: stats.zero_crossings,
            max_amplitude: stats.max_amplitude,
            spectral_centroid,
            spectral_flatness,
            duration,
        })
    }
}

fn validate_input(samples: &[f32], sample_rate: f32, duration: f32) -> Result<(), AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptySamples);
    }

    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(AnalysisError::InvalidSampleRate { sample_rate });
    }

    if !(duration.is_finite() && duration > 0.0) {
        return Err(AnalysisError::InvalidDuration { duration });
    }

    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(AnalysisError::NonFiniteSample { index });
    }

    Ok(())
}
