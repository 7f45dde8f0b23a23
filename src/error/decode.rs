// Decode error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Decode error code constants
///
/// Error code range: 2001-2004
pub struct DecodeErrorCodes {}

impl DecodeErrorCodes {
    /// Audio file could not be opened or its header parsed
    pub const OPEN_FAILED: i32 = 2001;

    /// Sample data could not be read
    pub const READ_FAILED: i32 = 2002;

    /// Sample format is not supported
    pub const UNSUPPORTED_FORMAT: i32 = 2003;

    /// File declares zero channels
    pub const NO_CHANNELS: i32 = 2004;
}

/// Log a decode error with structured context
pub fn log_decode_error(err: &DecodeError, context: &str) {
    error!(
        "Decode error in {}: code={}, component=WavDecoder, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Errors raised while turning an audio file into PCM samples
///
/// Error code ranges: 2001-2004
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Audio file could not be opened or its header parsed
    OpenFailed { path: String, reason: String },

    /// Sample data could not be read
    ReadFailed { reason: String },

    /// Sample format is not supported
    UnsupportedFormat { reason: String },

    /// File declares zero channels
    NoChannels,
}

impl ErrorCode for DecodeError {
    fn code(&self) -> i32 {
        match self {
            DecodeError::OpenFailed { .. } => DecodeErrorCodes::OPEN_FAILED,
            DecodeError::ReadFailed { .. } => DecodeErrorCodes::READ_FAILED,
            DecodeError::UnsupportedFormat { .. } => DecodeErrorCodes::UNSUPPORTED_FORMAT,
            DecodeError::NoChannels => DecodeErrorCodes::NO_CHANNELS,
        }
    }

    fn message(&self) -> String {
        match self {
            DecodeError::OpenFailed { path, reason } => {
                format!("Failed to open {}: {}", path, reason)
            }
            DecodeError::ReadFailed { reason } => format!("Failed to read samples: {}", reason),
            DecodeError::UnsupportedFormat { reason } => {
                format!("Unsupported sample format: {}", reason)
            }
            DecodeError::NoChannels => "Audio stream has zero channels".to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecodeError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_codes() {
        assert_eq!(
            DecodeError::OpenFailed {
                path: "a.wav".to_string(),
                reason: "missing".to_string()
            }
            .code(),
            DecodeErrorCodes::OPEN_FAILED
        );
        assert_eq!(
            DecodeError::ReadFailed {
                reason: "eof".to_string()
            }
            .code(),
            DecodeErrorCodes::READ_FAILED
        );
        assert_eq!(
            DecodeError::UnsupportedFormat {
                reason: "12-bit".to_string()
            }
            .code(),
            DecodeErrorCodes::UNSUPPORTED_FORMAT
        );
        assert_eq!(DecodeError::NoChannels.code(), DecodeErrorCodes::NO_CHANNELS);
    }

    #[test]
    fn test_decode_error_messages() {
        let err = DecodeError::OpenFailed {
            path: "clip.wav".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(err.message(), "Failed to open clip.wav: not found");
        assert!(format!("{}", err).contains("2001"));
    }
}
