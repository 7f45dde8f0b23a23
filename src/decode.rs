//! WAV decoding adapter.
//!
//! The analysis core only accepts decoded mono PCM. This module is the
//! external collaborator that produces it: it reads a WAV stream with
//! `hound`, converts integer PCM to `f32` in [-1, 1], keeps the first
//! channel and reports the sample rate and duration alongside the samples.

use std::io::Read;
use std::path::Path;

use crate::analysis::{AudioFeatures, FeatureExtractor};
use crate::error::{AnalysisError, DecodeError};

/// Mono PCM plus the metadata the extractor needs
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    /// Channel count of the source file (only the first channel is kept)
    pub source_channels: u16,
}

impl DecodedClip {
    /// Clip length in seconds
    pub fn duration(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        (self.samples.len() as f64 / self.sample_rate as f64) as f32
    }

    /// Run the extractor over this clip
    pub fn features(&self, extractor: &FeatureExtractor) -> Result<AudioFeatures, AnalysisError> {
        extractor.extract(&self.samples, self.sample_rate as f32, self.duration())
    }
}

/// Open and decode a WAV file
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<DecodedClip, DecodeError> {
    let path = path.as_ref();
    let reader = hound::WavReader::open(path).map_err(|err| DecodeError::OpenFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    let clip = read_clip(reader)?;
    log::debug!(
        "[Decode] {}: {} frames @ {} Hz ({} channel(s))",
        path.display(),
        clip.samples.len(),
        clip.sample_rate,
        clip.source_channels
    );
    Ok(clip)
}

/// Decode a WAV stream from any reader
pub fn decode_wav<R: Read>(reader: R) -> Result<DecodedClip, DecodeError> {
    let reader = hound::WavReader::new(reader).map_err(|err| DecodeError::OpenFailed {
        path: "<stream>".to_string(),
        reason: err.to_string(),
    })?;
    read_clip(reader)
}

fn read_clip<R: Read>(mut reader: hound::WavReader<R>) -> Result<DecodedClip, DecodeError> {
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(DecodeError::NoChannels);
    }

    let interleaved = match spec.sample_format {
        hound::SampleFormat::Float => {
            if spec.bits_per_sample != 32 {
                return Err(DecodeError::UnsupportedFormat {
                    reason: format!("{}-bit float", spec.bits_per_sample),
                });
            }
            collect_samples(reader.samples::<f32>(), |v| v)?
        }
        hound::SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            match bits {
                8 => {
                    let max = int_full_scale(bits);
                    collect_samples(reader.samples::<i8>(), |v| v as f32 / max)?
                }
                16 => {
                    let max = int_full_scale(bits);
                    collect_samples(reader.samples::<i16>(), |v| v as f32 / max)?
                }
                24 | 32 => {
                    let max = int_full_scale(bits);
                    collect_samples(reader.samples::<i32>(), |v| v as f32 / max)?
                }
                other => {
                    return Err(DecodeError::UnsupportedFormat {
                        reason: format!("{}-bit integer", other),
                    })
                }
            }
        }
    };

    let samples = interleaved
        .into_iter()
        .step_by(spec.channels as usize)
        .collect();

    Ok(DecodedClip {
        samples,
        sample_rate: spec.sample_rate,
        source_channels: spec.channels,
    })
}

/// Largest positive value of a signed integer sample of `bits` width
fn int_full_scale(bits: u16) -> f32 {
    ((1i64 << (bits - 1)) - 1) as f32
}

fn collect_samples<S, I, F>(samples: I, convert: F) -> Result<Vec<f32>, DecodeError>
where
    I: Iterator<Item = hound::Result<S>>,
    F: Fn(S) -> f32,
{
    samples
        .map(|sample| {
            sample.map(&convert).map_err(|err| DecodeError::ReadFailed {
                reason: err.to_string(),
            })
        })
        .collect()
}
