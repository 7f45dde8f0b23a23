// Temporal module - Time-domain feature extraction
//
// This module computes features directly from the time-domain signal:
// RMS energy, peak amplitude and zero-crossing count are gathered in a
// single linear scan, and the peak is then used to normalize the waveform.

/// Statistics gathered from one pass over the original samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalStats {
    /// Root-mean-square amplitude
    pub energy: f32,
    /// Peak absolute amplitude
    pub max_amplitude: f32,
    /// Sign changes between consecutive samples
    pub zero_crossings: u64,
}

/// Compute RMS energy, peak amplitude and zero crossings in one scan
///
/// A crossing is counted whenever consecutive samples fall on different
/// sides of zero, where zero itself counts as non-negative. The first sample
/// has no predecessor and never counts.
pub fn compute_stats(audio: &[f32]) -> TemporalStats {
    let mut energy_sum = 0.0f64;
    let mut max_amplitude = 0.0f32;
    let mut zero_crossings = 0u64;
    let mut previous: Option<bool> = None;

    for &sample in audio {
        energy_sum += sample as f64 * sample as f64;
        max_amplitude = max_amplitude.max(sample.abs());

        let negative = sample < 0.0;
        if previous.is_some_and(|was_negative| was_negative != negative) {
            zero_crossings += 1;
        }
        previous = Some(negative);
    }

    let energy = if audio.is_empty() {
        0.0
    } else {
        (energy_sum / audio.len() as f64).sqrt() as f32
    };

    TemporalStats {
        energy,
        max_amplitude,
        zero_crossings,
    }
}

/// Divide every sample by the peak amplitude
///
/// A silent signal (peak of 0) maps to an all-zero waveform of the same length.
pub fn normalize_waveform(audio: &[f32], max_amplitude: f32) -> Vec<f32> {
    if max_amplitude > 0.0 {
        audio.iter().map(|&sample| sample / max_amplitude).collect()
    } else {
        vec![0.0; audio.len()]
    }
}
