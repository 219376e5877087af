//! 8-bit RGB color type

use std::fmt;

/// An 8-bit RGB color triple.
///
/// This is the output type of the whole pipeline: generated tile colors,
/// placeholder colors and every pixel of the raster surface are `Rgb8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb8 {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a neutral grey with all channels set to `value`.
    #[inline]
    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Create a color from unit-range channel values.
    ///
    /// Each channel is scaled by 255, rounded to the nearest integer and
    /// clamped to 0..=255.
    ///
    /// # Example
    /// ```
    /// use swatch_engine::Rgb8;
    /// assert_eq!(Rgb8::from_unit(1.0, 0.5, -0.2), Rgb8::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit_to_u8(r),
            g: unit_to_u8(g),
            b: unit_to_u8(b),
        }
    }

    /// Channels as a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(color: Rgb8) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[inline]
fn unit_to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
