//! Adjustment composition
//!
//! Three layers combine into one [`Adjustment`] per category: the active
//! theme, that theme's override for the category, and the global warmth
//! bias. Hue and lightness layers add; saturation layers multiply.

use crate::catalog::Theme;
use crate::color::Hsl;

/// Lower bound for adjusted lightness, in percent.
pub const LIGHTNESS_FLOOR: f64 = 5.0;
/// Upper bound for adjusted lightness, in percent.
pub const LIGHTNESS_CEILING: f64 = 95.0;

/// Resolved adjustment for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Degrees added to the hue before wrapping
    pub hue_adjust: f64,
    /// Factor applied to saturation before clamping
    pub saturation_multiplier: f64,
    /// Percent points added to lightness before clamping
    pub lightness_adjust: f64,
}

impl Adjustment {
    /// Adjustment that leaves every color unchanged (apart from the
    /// lightness clamp).
    pub const NEUTRAL: Self = Self {
        hue_adjust: 0.0,
        saturation_multiplier: 1.0,
        lightness_adjust: 0.0,
    };

    /// Combine theme, per-category override and warmth for `category_id`.
    ///
    /// # Example
    /// ```
    /// use swatch_engine::{Adjustment, Catalog};
    ///
    /// let sunset = Catalog::BUILTIN.theme("sunset");
    /// let water = Adjustment::compose(sunset, 5, "water");
    /// assert_eq!(water.hue_adjust, -20.0 - 60.0 + 5.0);
    /// assert_eq!(water.lightness_adjust, 15.0);
    /// ```
    pub fn compose(theme: &Theme, warmth_bias: i32, category_id: &str) -> Self {
        let overrides = theme.override_for(category_id);
        Self {
            hue_adjust: theme.hue_shift + overrides.hue_shift_or_neutral() + warmth_bias as f64,
            saturation_multiplier: theme.saturation_multiplier
                * overrides.saturation_multiplier_or_neutral(),
            lightness_adjust: theme.lightness_shift + overrides.lightness_shift_or_neutral(),
        }
    }

    /// Apply to a base color: wrap hue into 0..360, clamp saturation to
    /// 0..=100 and lightness to 5..=95.
    pub fn apply(&self, base: Hsl) -> Hsl {
        Hsl::new(
            wrap_hue(base.hue + self.hue_adjust),
            (base.saturation * self.saturation_multiplier).clamp(0.0, 100.0),
            (base.lightness + self.lightness_adjust).clamp(LIGHTNESS_FLOOR, LIGHTNESS_CEILING),
        )
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Normalize a hue in degrees into `[0, 360)`. Negative values wrap forward.
#[inline]
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
