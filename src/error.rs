use alloc::string::String;
use enough::StopReason;

use crate::input::Field;

/// Errors from farbfeld decoding and format dispatch.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FarbfeldError {
    /// The magic token was read in full but is not `farbfeld`.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The input ended before `needed` bytes of `field` were available.
    ///
    /// `consumed` is how many bytes of that field were read before the end.
    #[error("unexpected end of input reading {field} ({consumed} of {needed} bytes)")]
    UnexpectedEof {
        field: Field,
        consumed: usize,
        needed: usize,
    },

    /// The underlying reader failed.
    #[cfg(feature = "std")]
    #[error("I/O error reading {field}")]
    Io {
        field: Field,
        #[source]
        source: std::io::Error,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// No registered format signature matches the leading bytes.
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl FarbfeldError {
    /// Whether the input had no bytes at all, as opposed to being truncated.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            FarbfeldError::UnexpectedEof {
                field: Field::Magic,
                consumed: 0,
                ..
            }
        )
    }

    /// Whether the input ended early, at any field.
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, FarbfeldError::UnexpectedEof { .. })
    }
}

impl From<StopReason> for FarbfeldError {
    fn from(r: StopReason) -> Self {
        FarbfeldError::Cancelled(r)
    }
}
