//! Codec error types.

use thiserror::Error;

/// Errors raised while building a codec context or decoding a code.
///
/// Encoding never fails once a [`CodecContext`](crate::CodecContext) exists;
/// lossy transforms are reported as [`EncodeWarning`](crate::EncodeWarning)s.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The code is empty or contains characters outside `0-9A-Z`.
    #[error("Invalid code: {0}")]
    MalformedInput(String),

    /// Checksum, divisibility or layout verification failed.
    #[error("Invalid code: {0}")]
    InvalidCode(String),

    /// The questionnaire cannot be expressed as a codec layout.
    #[error("Unsupported questionnaire layout: {0}")]
    Context(String),
}
