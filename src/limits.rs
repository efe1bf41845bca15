use alloc::format;

use crate::FarbfeldError;

/// Resource limits checked after the header is read, before pixels are allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check declared dimensions and return the pixel count to allocate.
    ///
    /// Fails with `DimensionsTooLarge` when the buffer size doesn't fit in
    /// `usize`, and with `LimitExceeded` for the first limit that is violated.
    pub(crate) fn check(
        &self,
        width: u32,
        height: u32,
        bytes_per_pixel: usize,
    ) -> Result<usize, FarbfeldError> {
        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(FarbfeldError::DimensionsTooLarge { width, height })?;
        let bytes = pixel_count
            .checked_mul(bytes_per_pixel)
            .ok_or(FarbfeldError::DimensionsTooLarge { width, height })?;

        let exceeded = |what: &str, value: u64, max: Option<u64>| match max {
            Some(max) if value > max => Err(FarbfeldError::LimitExceeded(format!(
                "{what} {value} exceeds limit {max}"
            ))),
            _ => Ok(()),
        };
        exceeded("width", u64::from(width), self.max_width)?;
        exceeded("height", u64::from(height), self.max_height)?;
        exceeded("pixel count", pixel_count as u64, self.max_pixels)?;
        exceeded("allocation bytes", bytes as u64, self.max_memory_bytes)?;
        Ok(pixel_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_returns_pixel_count() {
        assert_eq!(Limits::default().check(3, 5, 8).unwrap(), 15);
        assert_eq!(Limits::default().check(0, 5, 8).unwrap(), 0);
    }

    #[test]
    fn first_violated_limit_is_reported() {
        let limits = Limits {
            max_height: Some(4),
            max_memory_bytes: Some(1),
            ..Default::default()
        };
        match limits.check(2, 5, 8) {
            Err(FarbfeldError::LimitExceeded(msg)) => assert!(msg.starts_with("height 5")),
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn memory_limit_counts_bytes() {
        let limits = Limits {
            max_memory_bytes: Some(63),
            ..Default::default()
        };
        assert!(limits.check(2, 4, 8).is_err());
        assert!(limits.check(1, 7, 8).is_ok());
    }
}
