//! Colorblind simulation
//!
//! Each mode is a fixed 3x3 linear transform applied to the 0..255 channel
//! triple (as a column vector). Results are rounded and clamped back into
//! 8-bit range. Unknown mode ids resolve to [`ColorblindMode::None`], which
//! is the identity.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::color::Rgb8;

/// Row-major 3x3 matrix; row `i` produces output channel `i`.
pub type Matrix3 = [[f64; 3]; 3];

const PROTANOPIA: Matrix3 = [
    [0.567, 0.433, 0.000],
    [0.558, 0.442, 0.000],
    [0.000, 0.242, 0.758],
];

const DEUTERANOPIA: Matrix3 = [
    [0.625, 0.375, 0.000],
    [0.700, 0.300, 0.000],
    [0.000, 0.300, 0.700],
];

const TRITANOPIA: Matrix3 = [
    [0.950, 0.050, 0.000],
    [0.000, 0.433, 0.567],
    [0.000, 0.475, 0.525],
];

const ACHROMATOPSIA: Matrix3 = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

/// Simulated color vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorblindMode {
    /// Pass-through
    #[default]
    None,
    /// Red-blind
    Protanopia,
    /// Green-blind
    Deuteranopia,
    /// Blue-blind
    Tritanopia,
    /// Total color blindness (luma only)
    Achromatopsia,
}

impl ColorblindMode {
    /// All modes in menu order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];

    /// Stable identifier used in settings, queries and CLI flags.
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Protanopia => "Protanopia (red-blind)",
            Self::Deuteranopia => "Deuteranopia (green-blind)",
            Self::Tritanopia => "Tritanopia (blue-blind)",
            Self::Achromatopsia => "Achromatopsia (no color)",
        }
    }

    /// Resolve an identifier, case-insensitively. Unknown ids are `None`.
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.id().eq_ignore_ascii_case(id))
            .unwrap_or(Self::None)
    }

    /// The simulation matrix, or `None` for the identity mode.
    pub fn matrix(self) -> Option<&'static Matrix3> {
        match self {
            Self::None => None,
            Self::Protanopia => Some(&PROTANOPIA),
            Self::Deuteranopia => Some(&DEUTERANOPIA),
            Self::Tritanopia => Some(&TRITANOPIA),
            Self::Achromatopsia => Some(&ACHROMATOPSIA),
        }
    }

    /// Run `color` through this mode's matrix.
    ///
    /// # Example
    /// ```
    /// use swatch_engine::{ColorblindMode, Rgb8};
    ///
    /// let orange = Rgb8::new(255, 128, 0);
    /// assert_eq!(ColorblindMode::None.apply(orange), orange);
    ///
    /// let grey = ColorblindMode::Achromatopsia.apply(orange);
    /// assert_eq!(grey.r, grey.g);
    /// assert_eq!(grey.g, grey.b);
    /// ```
    pub fn apply(self, color: Rgb8) -> Rgb8 {
        match self.matrix() {
            None => color,
            Some(matrix) => transform(matrix, color),
        }
    }
}

impl FromStr for ColorblindMode {
    type Err = Infallible;

    /// Never fails: unknown ids resolve to [`ColorblindMode::None`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_id(s))
    }
}

impl fmt::Display for ColorblindMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn transform(matrix: &Matrix3, color: Rgb8) -> Rgb8 {
    let input = [color.r as f64, color.g as f64, color.b as f64];
    let channel = |row: &[f64; 3]| -> u8 {
        let value = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb8::new(channel(&matrix[0]), channel(&matrix[1]), channel(&matrix[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        for value in [0u8, 1, 17, 128, 254, 255] {
            let color = Rgb8::new(value, 255 - value, value / 2);
            assert_eq!(ColorblindMode::None.apply(color), color);
        }
    }

    #[test]
    fn test_ids_round_trip() {
        for mode in ColorblindMode::ALL {
            assert_eq!(ColorblindMode::from_id(mode.id()), mode);
            assert_eq!(mode.to_string(), mode.id());
        }
    }

    #[test]
    fn test_unknown_id_fails_open() {
        assert_eq!(ColorblindMode::from_id("monochromacy"), ColorblindMode::None);
        assert_eq!(ColorblindMode::from_id(""), ColorblindMode::None);
        let parsed: ColorblindMode = "bogus".parse().unwrap();
        assert_eq!(parsed, ColorblindMode::None);
    }

    #[test]
    fn test_id_parsing_is_case_insensitive() {
        assert_eq!(ColorblindMode::from_id(" Protanopia "), ColorblindMode::Protanopia);
        assert_eq!(ColorblindMode::from_id("TRITANOPIA"), ColorblindMode::Tritanopia);
    }

    #[test]
    fn test_protanopia_on_pure_red() {
        // [0.567, 0.558, 0.0] * 255 = [144.585, 142.29, 0]
        let result = ColorblindMode::Protanopia.apply(Rgb8::new(255, 0, 0));
        assert_eq!(result, Rgb8::new(145, 142, 0));
    }

    #[test]
    fn test_achromatopsia_is_luma() {
        // 0.299*200 + 0.587*100 + 0.114*50 = 124.8
        let result = ColorblindMode::Achromatopsia.apply(Rgb8::new(200, 100, 50));
        assert_eq!(result, Rgb8::grey(125));
    }

    #[test]
    fn test_white_stays_in_range() {
        // Rows summing to 1 keep white at 255; nothing may overflow.
        for mode in ColorblindMode::ALL {
            let white = mode.apply(Rgb8::grey(255));
            assert_eq!(white, Rgb8::grey(255), "{mode} changed white");
        }
    }

    /// Cross-check the hand-written product against nalgebra.
    #[test]
    fn test_matches_nalgebra_product() {
        use nalgebra::{Matrix3 as NaMatrix3, Vector3};

        let samples = [
            Rgb8::new(12, 200, 99),
            Rgb8::new(255, 128, 0),
            Rgb8::new(33, 66, 250),
            Rgb8::new(180, 180, 20),
        ];

        for mode in ColorblindMode::ALL.into_iter().skip(1) {
            let m = mode.matrix().unwrap();
            let na = NaMatrix3::new(
                m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
            );
            for color in samples {
                let v = na * Vector3::new(color.r as f64, color.g as f64, color.b as f64);
                let expected = Rgb8::new(
                    v.x.round().clamp(0.0, 255.0) as u8,
                    v.y.round().clamp(0.0, 255.0) as u8,
                    v.z.round().clamp(0.0, 255.0) as u8,
                );
                assert_eq!(mode.apply(color), expected, "{mode} on {color}");
            }
        }
    }
}
