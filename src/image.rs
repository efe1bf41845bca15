use alloc::vec;
use alloc::vec::Vec;

use crate::pixel::Rgba64;

/// Owned `width × height` grid of [`Rgba64`] pixels, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rgba64Image {
    pixels: Vec<Rgba64>,
    width: u32,
    height: u32,
}

impl Rgba64Image {
    /// Zero-filled image. `None` if `width * height` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let pixel_count = (width as usize).checked_mul(height as usize)?;
        Some(Self::zeroed(width, height, pixel_count))
    }

    /// Zero-filled image. Callers check that `width * height` fits in `usize`.
    pub(crate) fn zeroed(width: u32, height: u32, pixel_count: usize) -> Self {
        Self {
            pixels: vec![Rgba64::default(); pixel_count],
            width,
            height,
        }
    }

    /// Image built from row-major pixels. Returns `None` if the count doesn't match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba64>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;
        (pixels.len() == expected).then_some(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the image has no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba64> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel. Out-of-range coordinates are ignored and return `false`.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba64) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgba64] {
        &self.pixels
    }

    /// Iterate rows top to bottom. Yields nothing for a zero-width image.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba64]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    pub fn into_pixels(self) -> Vec<Rgba64> {
        self.pixels
    }

    /// Pixel data as RGBA16 samples in native byte order.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 8);
        for p in &self.pixels {
            for c in p.channels() {
                out.extend_from_slice(&c.to_ne_bytes());
            }
        }
        out
    }

    /// Copy into typed `rgb` pixels, row-major.
    #[cfg(feature = "rgb")]
    pub fn to_rgba16(&self) -> Vec<rgb::RGBA16> {
        self.pixels.iter().map(|&p| p.into()).collect()
    }

    /// Copy into an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA16> {
        imgref::ImgVec::new(
            self.to_rgba16(),
            self.width as usize,
            self.height as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pixel_ignores_out_of_range() {
        let mut img = Rgba64Image::zeroed(3, 2, 6);
        let p = Rgba64::new(1, 2, 3, 4);
        assert!(img.set_pixel(2, 1, p));
        assert!(!img.set_pixel(3, 0, p));
        assert!(!img.set_pixel(0, 2, p));
        assert_eq!(img.get_pixel(2, 1), Some(p));
        assert_eq!(img.get_pixel(3, 0), None);
        assert_eq!(img.pixels()[5], p);
    }

    #[test]
    fn rows_of_zero_width_image() {
        let img = Rgba64Image::zeroed(0, 5, 0);
        assert!(img.is_empty());
        assert_eq!(img.rows().count(), 0);
    }

    #[test]
    fn new_is_zero_filled() {
        let img = Rgba64Image::new(4, 3).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.pixels().len(), 12);
        assert!(img.pixels().iter().all(|&p| p == Rgba64::default()));
        assert!(Rgba64Image::new(0, 7).unwrap().is_empty());
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn new_rejects_overflowing_size() {
        assert!(Rgba64Image::new(u32::MAX, 2).is_none());
    }

    #[test]
    fn from_pixels_checks_count() {
        assert!(Rgba64Image::from_pixels(2, 2, vec![Rgba64::default(); 3]).is_none());
        let img = Rgba64Image::from_pixels(2, 1, vec![Rgba64::new(0, 0, 0, 65535); 2]).unwrap();
        assert_eq!(img.rows().next().map(|r| r.len()), Some(2));
    }
}
