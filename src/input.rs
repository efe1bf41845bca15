//! Fixed-size field reads over byte slices and `std::io` readers.

use core::fmt;

use crate::error::FarbfeldError;

/// The fixed-size field being read when decoding stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Magic,
    Width,
    Height,
    /// Leading bytes read by a format registry to pick a decoder.
    Signature,
    /// Pixel record, numbered in stream order from zero.
    Pixel(u64),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Magic => f.write_str("magic"),
            Field::Width => f.write_str("width"),
            Field::Height => f.write_str("height"),
            Field::Signature => f.write_str("format signature"),
            Field::Pixel(n) => write!(f, "pixel record {n}"),
        }
    }
}

/// Result of trying to fill a buffer completely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Fill {
    Complete,
    /// Input ended after `consumed` bytes of the buffer were written.
    Ended { consumed: usize },
}

/// A forward-only byte source.
pub(crate) trait Input {
    /// Fill `buf` entirely, or report how far it got before the input ended.
    fn fill(&mut self, buf: &mut [u8], field: Field) -> Result<Fill, FarbfeldError>;

    /// Bytes left, when the source knows its length up front.
    fn remaining(&self) -> Option<usize> {
        None
    }
}

impl Input for &[u8] {
    fn fill(&mut self, buf: &mut [u8], _field: Field) -> Result<Fill, FarbfeldError> {
        let data: &[u8] = *self;
        let n = buf.len().min(data.len());
        let (head, rest) = data.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = rest;
        if n == buf.len() {
            Ok(Fill::Complete)
        } else {
            Ok(Fill::Ended { consumed: n })
        }
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.len())
    }
}

/// Adapts a `std::io::Read` into an [`Input`].
#[cfg(feature = "std")]
pub(crate) struct IoInput<R>(pub R);

#[cfg(feature = "std")]
impl<R: std::io::Read> Input for IoInput<R> {
    fn fill(&mut self, buf: &mut [u8], field: Field) -> Result<Fill, FarbfeldError> {
        let mut consumed = 0;
        while consumed < buf.len() {
            match self.0.read(&mut buf[consumed..]) {
                Ok(0) => return Ok(Fill::Ended { consumed }),
                Ok(n) => consumed += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(source) => return Err(FarbfeldError::Io { field, source }),
            }
        }
        Ok(Fill::Complete)
    }
}

/// Read exactly `N` bytes for `field`; a short read is `UnexpectedEof`.
pub(crate) fn read_array<const N: usize>(
    input: &mut impl Input,
    field: Field,
) -> Result<[u8; N], FarbfeldError> {
    let mut buf = [0u8; N];
    match input.fill(&mut buf, field)? {
        Fill::Complete => Ok(buf),
        Fill::Ended { consumed } => Err(FarbfeldError::UnexpectedEof {
            field,
            consumed,
            needed: N,
        }),
    }
}
