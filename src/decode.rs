use enough::Stop;

use crate::error::FarbfeldError;
use crate::image::Rgba64Image;
use crate::limits::Limits;

/// Order in which pixel records are assigned to buffer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Row-major: record `n` lands at `(n % width, n / width)`.
    #[default]
    RowMajor,
    /// Legacy order with swapped loop bounds.
    ///
    /// The outer index counts over `0..width` and is used as `y`, the inner
    /// index counts over `0..height` and is used as `x`. Writes that fall
    /// outside the buffer are dropped. Identical to [`Traversal::RowMajor`]
    /// for square images; only useful to reproduce output of older tools.
    Transposed,
}

/// Per-call decode configuration.
///
/// ```
/// use zenfarbfeld::{DecodeRequest, Limits, Unstoppable};
///
/// let mut data = b"farbfeld".to_vec();
/// data.extend_from_slice(&1u32.to_be_bytes());
/// data.extend_from_slice(&1u32.to_be_bytes());
/// data.extend_from_slice(&[0, 1, 0, 2, 0, 3, 0, 4]);
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let image = DecodeRequest::new()
///     .with_limits(&limits)
///     .decode(&data, Unstoppable)?;
/// assert_eq!(image.pixels()[0].channels(), [1, 2, 3, 4]);
/// # Ok::<(), zenfarbfeld::FarbfeldError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeRequest<'a> {
    limits: Option<&'a Limits>,
    traversal: Traversal,
}

impl<'a> DecodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Decode from a byte slice. Trailing bytes after the pixel data are ignored.
    pub fn decode(&self, data: &[u8], stop: impl Stop) -> Result<Rgba64Image, FarbfeldError> {
        let mut input = data;
        crate::farbfeld::decode(&mut input, self.limits, self.traversal, &stop)
    }

    /// Decode from a reader, consuming exactly the header and pixel records.
    ///
    /// The reader is read in small fixed-size pieces; wrap unbuffered
    /// sources in a `BufReader`.
    #[cfg(feature = "std")]
    pub fn decode_reader<R: std::io::Read>(
        &self,
        reader: R,
        stop: impl Stop,
    ) -> Result<Rgba64Image, FarbfeldError> {
        let mut input = crate::input::IoInput(reader);
        crate::farbfeld::decode(&mut input, self.limits, self.traversal, &stop)
    }
}
