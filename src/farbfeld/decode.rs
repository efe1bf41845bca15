//! Farbfeld field readers: magic token, dimensions, pixel records.

use alloc::string::ToString;
use alloc::vec::Vec;
use enough::Stop;

use super::MAGIC;
use crate::decode::Traversal;
use crate::error::FarbfeldError;
use crate::image::Rgba64Image;
use crate::input::{Field, Input, read_array};
use crate::pixel::Rgba64;

/// Read the 8-byte magic token and reject anything but `farbfeld`.
pub(crate) fn check_header(input: &mut impl Input) -> Result<(), FarbfeldError> {
    let magic: [u8; 8] = read_array(input, Field::Magic)?;
    if &magic != MAGIC {
        return Err(FarbfeldError::InvalidFormat(
            "not a farbfeld file".to_string(),
        ));
    }
    Ok(())
}

/// Read width then height, each a big-endian u32. Any value is accepted.
pub(crate) fn read_dimensions(input: &mut impl Input) -> Result<(u32, u32), FarbfeldError> {
    let width = u32::from_be_bytes(read_array(input, Field::Width)?);
    let height = u32::from_be_bytes(read_array(input, Field::Height)?);
    Ok((width, height))
}

fn read_pixel(input: &mut impl Input, index: u64) -> Result<Rgba64, FarbfeldError> {
    read_array(input, Field::Pixel(index)).map(Rgba64::from_be_bytes)
}

/// Bytes per pixel record.
const RECORD_LEN: usize = 8;

/// Records reserved up front; the buffer grows past this only as records arrive.
const MAX_PREALLOC_PIXELS: usize = 1 << 16;

/// Read `pixel_count` sequential pixel records and place them per `traversal`.
///
/// Memory grows with the records actually read, never with the declared
/// dimensions alone, so a truncated stream fails with `UnexpectedEof`.
pub(crate) fn decode_pixels(
    input: &mut impl Input,
    width: u32,
    height: u32,
    pixel_count: usize,
    traversal: Traversal,
    stop: &dyn Stop,
) -> Result<Rgba64Image, FarbfeldError> {
    // Known-length input: report the truncation point before reading anything.
    if let Some(remaining) = input.remaining() {
        if remaining < pixel_count.saturating_mul(RECORD_LEN) {
            return Err(FarbfeldError::UnexpectedEof {
                field: Field::Pixel((remaining / RECORD_LEN) as u64),
                consumed: remaining % RECORD_LEN,
                needed: RECORD_LEN,
            });
        }
    }

    // Length of one outer iteration: a row, or a column in transposed order.
    let run = match traversal {
        Traversal::RowMajor => width,
        Traversal::Transposed => height,
    }
    .max(1) as usize;

    let mut records = Vec::with_capacity(pixel_count.min(MAX_PREALLOC_PIXELS));
    for index in 0..pixel_count {
        if index % run.saturating_mul(16) == 0 {
            stop.check()?;
        }
        records.push(read_pixel(input, index as u64)?);
    }

    match traversal {
        Traversal::RowMajor => Rgba64Image::from_pixels(width, height, records)
            .ok_or(FarbfeldError::DimensionsTooLarge { width, height }),
        Traversal::Transposed => {
            // Outer index runs over the width range but lands in y; writes
            // past the buffer edge are dropped.
            let mut image = Rgba64Image::zeroed(width, height, pixel_count);
            let column = height.max(1) as usize;
            for (index, px) in records.into_iter().enumerate() {
                let outer = (index / column) as u32;
                let inner = (index % column) as u32;
                image.set_pixel(inner, outer, px);
            }
            Ok(image)
        }
    }
}
