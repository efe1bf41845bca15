//! # zenfarbfeld
//!
//! Decoder for [farbfeld](https://tools.suckless.org/farbfeld/), the
//! uncompressed 16-bit-per-channel RGBA image format.
//!
//! ## Format
//!
//! | Offset | Length | Field         | Encoding                         |
//! |--------|--------|---------------|----------------------------------|
//! | 0      | 8      | magic         | ASCII `farbfeld`                 |
//! | 8      | 4      | width         | big-endian u32                   |
//! | 12     | 4      | height        | big-endian u32                   |
//! | 16     | 8×N    | pixel records | R, G, B, A as big-endian u16     |
//!
//! Records are row-major with no padding. Decoding reads the stream strictly
//! forward and stops after the last record; trailing bytes are left unread.
//!
//! ## Errors
//!
//! A stream whose magic token is wrong fails with
//! [`FarbfeldError::InvalidFormat`]. A stream that ends inside any field fails
//! with [`FarbfeldError::UnexpectedEof`], which names the field and how many of
//! its bytes were present. No partial image is ever returned.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Partial or incremental decode
//! - Color conversion
//!
//! ## Usage
//!
//! ```no_run
//! use zenfarbfeld::{DecodeRequest, ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your farbfeld bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.color_model);
//!
//! // Decode
//! let image = DecodeRequest::new().decode(data, Unstoppable)?;
//! for row in image.rows() {
//!     let _ = row;
//! }
//! # Ok::<(), zenfarbfeld::FarbfeldError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod farbfeld;
mod image;
mod info;
mod input;
mod limits;
mod pixel;

#[cfg(feature = "std")]
pub mod registry;

// Re-exports
pub use decode::{DecodeRequest, Traversal};
pub use enough::{Stop, Unstoppable};
pub use error::FarbfeldError;
pub use farbfeld::{FORMAT_NAME, HEADER_LEN, MAGIC};
pub use image::Rgba64Image;
pub use info::ImageInfo;
pub use input::Field;
pub use limits::Limits;
pub use pixel::{ColorModel, Rgba64};

#[cfg(feature = "std")]
pub use farbfeld::register;
#[cfg(feature = "std")]
pub use registry::{FormatRegistry, FormatSpec};

/// Decode a farbfeld image from a byte slice.
pub fn decode(data: &[u8]) -> Result<Rgba64Image, FarbfeldError> {
    DecodeRequest::new().decode(data, Unstoppable)
}

/// Read only the header and dimensions from a byte slice.
///
/// Consumes exactly [`HEADER_LEN`] bytes; pixel data need not be present.
pub fn decode_config(data: &[u8]) -> Result<ImageInfo, FarbfeldError> {
    let mut input = data;
    farbfeld::decode_config(&mut input)
}

/// Decode a farbfeld image from a reader.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::Read>(reader: R) -> Result<Rgba64Image, FarbfeldError> {
    DecodeRequest::new().decode_reader(reader, Unstoppable)
}

/// Read only the header and dimensions from a reader.
///
/// Consumes exactly [`HEADER_LEN`] bytes.
#[cfg(feature = "std")]
pub fn decode_config_reader<R: std::io::Read>(reader: R) -> Result<ImageInfo, FarbfeldError> {
    let mut input = input::IoInput(reader);
    farbfeld::decode_config(&mut input)
}
