// Error types for audio feature extraction and comparison
//
// This module defines custom error types for analysis and decoding operations,
// providing structured error handling with stable numeric error codes.

mod analysis;
mod decode;

pub use analysis::{log_analysis_error, AnalysisError, AnalysisErrorCodes};
pub use decode::{log_decode_error, DecodeError, DecodeErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, so callers outside Rust (CLI exit reports,
/// JSON payloads) can match on a stable number instead of a string.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
