// Analysis error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Analysis error code constants
///
/// Error code range: 1001-1005
pub struct AnalysisErrorCodes {}

impl AnalysisErrorCodes {
    /// Sample buffer was empty
    pub const EMPTY_SAMPLES: i32 = 1001;

    /// Sample rate was zero, negative or not finite
    pub const INVALID_SAMPLE_RATE: i32 = 1002;

    /// Duration was zero, negative or not finite
    pub const INVALID_DURATION: i32 = 1003;

    /// Sample buffer contained NaN or infinity
    pub const NON_FINITE_SAMPLE: i32 = 1004;

    /// Extraction or comparison configuration was rejected
    pub const INVALID_CONFIG: i32 = 1005;
}

/// Log an analysis error with structured context
///
/// Emits a single `error!` line carrying the error code, the component
/// that raised it and the caller-supplied context string.
pub fn log_analysis_error(err: &AnalysisError, context: &str) {
    error!(
        "Analysis error in {}: code={}, component={}, message={}",
        context,
        err.code(),
        err.component(),
        err.message()
    );
}

/// Analysis-related errors
///
/// The first four variants are invalid-input errors raised by the feature
/// extractor before any computation starts. Degenerate numeric cases such as
/// silence are not errors.
///
/// Error code ranges: 1001-1005
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Sample buffer was empty
    EmptySamples,

    /// Sample rate must be finite and > 0
    InvalidSampleRate { sample_rate: f32 },

    /// Duration must be finite and > 0
    InvalidDuration { duration: f32 },

    /// Sample at `index` is NaN or infinite
    NonFiniteSample { index: usize },

    /// Configuration rejected by validation
    InvalidConfig { reason: String },
}

impl AnalysisError {
    /// True for errors caused by the caller's sample buffer, rate or duration
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, AnalysisError::InvalidConfig { .. })
    }

    /// Name of the component that raises this error
    pub fn component(&self) -> &'static str {
        match self {
            AnalysisError::InvalidConfig { .. } => "Config",
            _ => "FeatureExtractor",
        }
    }
}

impl ErrorCode for AnalysisError {
    fn code(&self) -> i32 {
        match self {
            AnalysisError::EmptySamples => AnalysisErrorCodes::EMPTY_SAMPLES,
            AnalysisError::InvalidSampleRate { .. } => AnalysisErrorCodes::INVALID_SAMPLE_RATE,
            AnalysisError::InvalidDuration { .. } => AnalysisErrorCodes::INVALID_DURATION,
            AnalysisError::NonFiniteSample { .. } => AnalysisErrorCodes::NON_FINITE_SAMPLE,
            AnalysisError::InvalidConfig { .. } => AnalysisErrorCodes::INVALID_CONFIG,
        }
    }

    fn message(&self) -> String {
        match self {
            AnalysisError::EmptySamples => "Sample buffer is empty".to_string(),
            AnalysisError::InvalidSampleRate { sample_rate } => {
                format!("Sample rate must be greater than 0 (got {})", sample_rate)
            }
            AnalysisError::InvalidDuration { duration } => {
                format!("Duration must be greater than 0 (got {})", duration)
            }
            AnalysisError::NonFiniteSample { index } => {
                format!("Sample {} is not a finite number", index)
            }
            AnalysisError::InvalidConfig { reason } => {
                format!("Invalid configuration: {}", reason)
            }
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnalysisError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for AnalysisError {}
