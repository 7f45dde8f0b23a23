// FFT module - Fast Fourier Transform computation
//
// This module handles FFT computation with Hann windowing to reduce
// spectral leakage. The magnitude spectrum is used by spectral feature
// extraction functions.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Default analysis window length in samples
pub const FFT_SIZE: usize = 2048;

/// FFT processor that computes magnitude spectra from audio windows
///
/// The plan is built once in `new`; `compute_magnitude_spectrum` only needs
/// `&self`, so a processor can be shared between threads.
pub struct FftProcessor {
    fft: Arc<dyn Fft<f32>>,
    fft_size: usize,
    /// Hann window for FFT (pre-computed)
    window: Vec<f32>,
}

impl FftProcessor {
    /// Create a new FFT processor
    ///
    /// # Arguments
    /// * `fft_size` - FFT window size (must be >= 2)
    pub fn new(fft_size: usize) -> Self {
        let window = hann_window(fft_size);

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);

        Self {
            fft,
            fft_size,
            window,
        }
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Compute magnitude spectrum using FFT
    ///
    /// Copies at most `fft_size` samples from the start of `audio`, zero-pads
    /// the rest, applies the Hann window and runs a complex forward FFT.
    ///
    /// # Returns
    /// Magnitude `sqrt(re² + im²)` of the first `fft_size / 2` bins
    pub fn compute_magnitude_spectrum(&self, audio: &[f32]) -> Vec<f32> {
        let mut buffer = vec![Complex::new(0.0f32, 0.0); self.fft_size];

        for ((slot, &sample), &w) in buffer.iter_mut().zip(audio).zip(&self.window) {
            slot.re = sample * w;
        }

        self.fft.process(&mut buffer);

        buffer[..self.fft_size / 2]
            .iter()
            .map(|c| c.norm())
            .collect()
    }
}

fn hann_window(size: usize) -> Vec<f32> {
    let n = size as f32;
    (0..size)
        .map(|i| 0.5 * (1.0 - ((2.0 * std::f32::consts::PI * i as f32) / (n - 1.0)).cos()))
        .collect()
}
