use crate::pixel::ColorModel;

/// Header metadata, read without touching pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub color_model: ColorModel,
}

impl ImageInfo {
    /// Probe a farbfeld header from the first 16 bytes of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, crate::FarbfeldError> {
        crate::decode_config(data)
    }

    /// Size of the decoded pixel buffer in bytes, if it fits in `u64`.
    pub fn output_bytes(&self) -> Option<u64> {
        u64::from(self.width)
            .checked_mul(u64::from(self.height))?
            .checked_mul(self.color_model.bytes_per_pixel() as u64)
    }
}
