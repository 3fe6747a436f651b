//! Error types for strict decoding.
//!
//! The lenient codec operations are total and never fail. Only the `try_*`
//! variants report errors.

use thiserror::Error;

/// Errors returned by the strict decoding operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The input length is not a multiple of the element width.
    #[error("invalid length: {len} bytes is not a multiple of the {width}-byte element width")]
    InvalidLength { len: usize, width: usize },
}

impl CodecError {
    /// Number of trailing bytes that do not form a complete element.
    pub fn remainder(&self) -> usize {
        match self {
            CodecError::InvalidLength { len, width } => len % width,
        }
    }
}
