//! HSL color type
//!
//! Hue is in degrees, saturation and lightness are percentages. These are the
//! units the catalog ranges and theme shifts are written in, so all
//! interpolation and adjustment happens on `Hsl` before a single conversion
//! to 8-bit RGB at the end.

use super::rgb::Rgb8;

/// A color in HSL space using native units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (0.0..360.0)
    pub hue: f64,
    /// Saturation in percent (0.0..=100.0)
    pub saturation: f64,
    /// Lightness in percent (0.0..=100.0)
    pub lightness: f64,
}

impl Hsl {
    /// Create a new HSL color.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit RGB with the standard piecewise HSL formula.
    ///
    /// Zero saturation is achromatic. Hue outside 0..360 wraps; saturation
    /// and lightness outside 0..=100 are clamped. Channels round to the
    /// nearest integer.
    ///
    /// # Example
    /// ```
    /// use swatch_engine::{Hsl, Rgb8};
    /// assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb8(), Rgb8::new(0, 255, 0));
    /// assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb8(), Rgb8::grey(255));
    /// ```
    pub fn to_rgb8(self) -> Rgb8 {
        let h = self.hue.rem_euclid(360.0) / 360.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            return Rgb8::from_unit(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb8::from_unit(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

impl From<Hsl> for Rgb8 {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb8()
    }
}

/// One channel of the hue sector formula, `t` is the hue offset in turns.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
