/// One farbfeld pixel: four 16-bit channels, not alpha-premultiplied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba64 {
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Parse one 8-byte pixel record (R, G, B, A as big-endian u16).
    pub const fn from_be_bytes(rec: [u8; 8]) -> Self {
        Self {
            r: u16::from_be_bytes([rec[0], rec[1]]),
            g: u16::from_be_bytes([rec[2], rec[3]]),
            b: u16::from_be_bytes([rec[4], rec[5]]),
            a: u16::from_be_bytes([rec[6], rec[7]]),
        }
    }

    /// Channels in R, G, B, A order.
    pub const fn channels(&self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(feature = "rgb")]
impl From<Rgba64> for rgb::RGBA16 {
    fn from(p: Rgba64) -> Self {
        rgb::RGBA16 {
            r: p.r,
            g: p.g,
            b: p.b,
            a: p.a,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGBA16> for Rgba64 {
    fn from(p: rgb::RGBA16) -> Self {
        Self::new(p.r, p.g, p.b, p.a)
    }
}

/// Color model of decoded pixels.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// 4 channels, 16-bit RGBA.
    Rgba64,
}

impl ColorModel {
    /// Bytes per pixel in memory.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgba64 => 8,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgba64 => 4,
        }
    }
}
