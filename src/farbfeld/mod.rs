//! Farbfeld image format decoder (internal).
//!
//! Farbfeld is a simple lossless format: 8-byte magic ("farbfeld"),
//! width/height as u32 big-endian, then RGBA u16 big-endian pixels with
//! no padding, row-major.

pub(crate) mod decode;

use enough::Stop;

use crate::decode::Traversal;
use crate::error::FarbfeldError;
use crate::image::Rgba64Image;
use crate::info::ImageInfo;
use crate::input::Input;
use crate::limits::Limits;
use crate::pixel::ColorModel;

/// Leading bytes of every farbfeld stream.
pub const MAGIC: &[u8; 8] = b"farbfeld";

/// Name the format is registered under.
pub const FORMAT_NAME: &str = "farbfeld";

/// Header plus dimensions; everything `decode_config` consumes.
pub const HEADER_LEN: usize = 16;

/// Read header and dimensions only.
pub(crate) fn decode_config(input: &mut impl Input) -> Result<ImageInfo, FarbfeldError> {
    decode::check_header(input)?;
    let (width, height) = decode::read_dimensions(input)?;
    Ok(ImageInfo {
        width,
        height,
        color_model: ColorModel::Rgba64,
    })
}

/// Decode a full image. Nothing is returned unless every pixel record was read.
pub(crate) fn decode(
    input: &mut impl Input,
    limits: Option<&Limits>,
    traversal: Traversal,
    stop: &dyn Stop,
) -> Result<Rgba64Image, FarbfeldError> {
    let info = decode_config(input)?;
    let unlimited = Limits::default();
    let pixel_count = limits.unwrap_or(&unlimited).check(
        info.width,
        info.height,
        info.color_model.bytes_per_pixel(),
    )?;
    stop.check()?;
    decode::decode_pixels(
        input,
        info.width,
        info.height,
        pixel_count,
        traversal,
        stop,
    )
}

/// Register farbfeld with `registry` under [`FORMAT_NAME`] and [`MAGIC`].
#[cfg(feature = "std")]
pub fn register(registry: &mut crate::registry::FormatRegistry) {
    registry.register(crate::registry::FormatSpec {
        name: FORMAT_NAME,
        signature: MAGIC,
        decode: decode_dyn,
        decode_config: decode_config_dyn,
    });
}

#[cfg(feature = "std")]
fn decode_dyn(reader: &mut dyn std::io::Read) -> Result<Rgba64Image, FarbfeldError> {
    crate::decode_reader(reader)
}

#[cfg(feature = "std")]
fn decode_config_dyn(reader: &mut dyn std::io::Read) -> Result<ImageInfo, FarbfeldError> {
    crate::decode_config_reader(reader)
}
