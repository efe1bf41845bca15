//! Explicit format registry: sniff leading bytes, dispatch to a decoder.
//!
//! Nothing is registered implicitly. The host builds a [`FormatRegistry`]
//! during its own startup and calls [`crate::register`] (or registers its
//! own [`FormatSpec`]s) before decoding.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use std::io::Read;

use crate::error::FarbfeldError;
use crate::image::Rgba64Image;
use crate::info::ImageInfo;
use crate::input::{Field, Fill, Input, IoInput};

/// Full decode entry point of a registered format.
pub type DecodeFn = fn(&mut dyn Read) -> Result<Rgba64Image, FarbfeldError>;

/// Metadata-only entry point of a registered format.
pub type DecodeConfigFn = fn(&mut dyn Read) -> Result<ImageInfo, FarbfeldError>;

/// A decoder and the leading bytes that identify its format.
#[derive(Clone, Copy)]
pub struct FormatSpec {
    pub name: &'static str,
    pub signature: &'static [u8],
    pub decode: DecodeFn,
    pub decode_config: DecodeConfigFn,
}

impl FormatSpec {
    fn matches(&self, prefix: &[u8]) -> bool {
        prefix.starts_with(self.signature)
    }
}

impl fmt::Debug for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatSpec")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormatRegistry {
    formats: Vec<FormatSpec>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a format. A format already registered under the same name is replaced.
    pub fn register(&mut self, spec: FormatSpec) {
        match self.formats.iter_mut().find(|f| f.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.formats.push(spec),
        }
    }

    /// Registered formats, in registration order.
    pub fn formats(&self) -> &[FormatSpec] {
        &self.formats
    }

    /// First registered format whose signature starts `prefix`.
    pub fn sniff(&self, prefix: &[u8]) -> Option<&FormatSpec> {
        self.formats.iter().find(|f| f.matches(prefix))
    }

    /// Sniff the stream's leading bytes, then decode it with the matching format.
    pub fn decode<R: Read>(
        &self,
        mut reader: R,
    ) -> Result<(&FormatSpec, Rgba64Image), FarbfeldError> {
        let (spec, prefix) = self.select(&mut reader)?;
        let mut rest = prefix.as_slice().chain(reader);
        Ok((spec, (spec.decode)(&mut rest)?))
    }

    /// Sniff the stream's leading bytes, then read only its header.
    pub fn decode_config<R: Read>(
        &self,
        mut reader: R,
    ) -> Result<(&FormatSpec, ImageInfo), FarbfeldError> {
        let (spec, prefix) = self.select(&mut reader)?;
        let mut rest = prefix.as_slice().chain(reader);
        Ok((spec, (spec.decode_config)(&mut rest)?))
    }

    /// Read up to the longest signature and pick a format. Returns the bytes
    /// consumed so the chosen decoder can see the stream from the start.
    /// Reader faults here are reported against [`Field::Signature`].
    fn select<R: Read>(
        &self,
        reader: &mut R,
    ) -> Result<(&FormatSpec, Vec<u8>), FarbfeldError> {
        let longest = self
            .formats
            .iter()
            .map(|f| f.signature.len())
            .max()
            .unwrap_or(0);
        let mut prefix = vec![0u8; longest];
        let mut input = IoInput(&mut *reader);
        if let Fill::Ended { consumed } = input.fill(&mut prefix, Field::Signature)? {
            prefix.truncate(consumed);
        }
        let spec = self.sniff(&prefix).ok_or(FarbfeldError::UnrecognizedFormat)?;
        Ok((spec, prefix))
    }
}
