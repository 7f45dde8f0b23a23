// Spectral module - Frequency-domain feature extraction
//
// This module computes spectral features from magnitude spectra.
// All features are based on the magnitude spectrum (absolute values of FFT bins).
//
// References:
// - Peeters, G. (2004). A large set of audio features for sound description
// - Lerch, A. (2012). An Introduction to Audio Content Analysis

/// Spectral feature computation functions
pub struct SpectralFeatures {
    fft_size: usize,
    flatness_epsilon: f32,
}

impl SpectralFeatures {
    /// Create a new spectral features processor
    ///
    /// # Arguments
    /// * `fft_size` - FFT window size the spectrum was computed with
    /// * `flatness_epsilon` - Offset added to each bin before the flatness ratio
    pub fn new(fft_size: usize, flatness_epsilon: f32) -> Self {
        Self {
            fft_size,
            flatness_epsilon,
        }
    }

    /// Compute spectral centroid (weighted mean frequency)
    ///
    /// Formula: centroid = Σ(f_i × |X[i]|) / Σ|X[i]|, with f_i = i × sample_rate / N
    ///
    /// # Returns
    /// Spectral centroid in Hz, or 0 when the spectrum sums to zero
    pub fn compute_centroid(&self, spectrum: &[f32], sample_rate: f32) -> f32 {
        let freq_bin_width = sample_rate as f64 / self.fft_size as f64;

        let (weighted_sum, magnitude_sum) =
            spectrum
                .iter()
                .enumerate()
                .fold((0.0f64, 0.0f64), |(weighted, total), (i, &mag)| {
                    let mag = mag as f64;
                    (weighted + i as f64 * freq_bin_width * mag, total + mag)
                });

        if magnitude_sum > 0.0 {
            (weighted_sum / magnitude_sum) as f32
        } else {
            0.0
        }
    }

    /// Compute spectral flatness (tonality measure)
    ///
    /// Formula: flatness = exp(mean(ln(|X[i]| + ε))) / mean(|X[i]| + ε)
    ///
    /// Returns a value between 0 (tonal, e.g., sine wave) and 1 (noise-like).
    /// The epsilon keeps the logarithm finite on empty bins, so an all-zero
    /// spectrum is perfectly flat.
    pub fn compute_flatness(&self, spectrum: &[f32]) -> f32 {
        if spectrum.is_empty() {
            return 0.0;
        }

        let epsilon = self.flatness_epsilon as f64;
        let count = spectrum.len() as f64;

        let (log_sum, sum) = spectrum
            .iter()
            .map(|&mag| mag as f64 + epsilon)
            .fold((0.0f64, 0.0f64), |(log_sum, sum), value| {
                (log_sum + value.ln(), sum + value)
            });

        let geometric_mean = (log_sum / count).exp();
        let arithmetic_mean = sum / count;

        (geometric_mean / arithmetic_mean).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_flat_spectrum_has_unit_flatness() {
        let spectral = SpectralFeatures::new(2048, EPSILON);
        for c in [0.001f32, 0.5, 3.0, 250.0] {
            let flatness = spectral.compute_flatness(&vec![c; 1024]);
            assert!((flatness - 1.0).abs() < 1e-6, "c={} flatness={}", c, flatness);
        }
    }

    #[test]
    fn test_single_peak_is_tonal() {
        let spectral = SpectralFeatures::new(2048, EPSILON);
        let mut spectrum = vec![0.0; 1024];
        spectrum[100] = 500.0;
        let flatness = spectral.compute_flatness(&spectrum);
        assert!(flatness < 0.01, "flatness {}", flatness);
    }

    #[test]
    fn test_zero_spectrum_is_flat() {
        let spectral = SpectralFeatures::new(2048, EPSILON);
        let flatness = spectral.compute_flatness(&[0.0; 1024]);
        assert!((flatness - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_centroid_of_single_bin() {
        let spectral = SpectralFeatures::new(2048, EPSILON);
        let mut spectrum = vec![0.0; 1024];
        spectrum[256] = 1.0;
        // 256 * 48000 / 2048 = 6000 Hz
        let centroid = spectral.compute_centroid(&spectrum, 48000.0);
        assert!((centroid - 6000.0).abs() < 1e-3, "centroid {}", centroid);
    }

    #[test]
    fn test_centroid_of_two_equal_bins_is_midpoint() {
        let spectral = SpectralFeatures::new(1024, EPSILON);
        let mut spectrum = vec![0.0; 512];
        spectrum[10] = 2.0;
        spectrum[30] = 2.0;
        // Bin width 8000 / 1024 = 7.8125 Hz; midpoint bin 20
        let centroid = spectral.compute_centroid(&spectrum, 8000.0);
        assert!((centroid - 156.25).abs() < 1e-3, "centroid {}", centroid);
    }

    #[test]
    fn test_centroid_of_zero_spectrum() {
        let spectral = SpectralFeatures::new(2048, EPSILON);
        assert_eq!(spectral.compute_centroid(&[0.0; 1024], 44100.0), 0.0);
    }
}
