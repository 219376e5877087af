//! Theme presets
//!
//! A theme is a global HSL adjustment plus optional per-category overrides.
//! Overrides are partial: any field left unset falls back to the neutral
//! value of its operator (0 for shifts, 1 for the saturation multiplier).

/// Per-category override record. Unset fields are neutral.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialAdjustment {
    pub hue_shift: Option<f64>,
    pub saturation_multiplier: Option<f64>,
    pub lightness_shift: Option<f64>,
}

impl PartialAdjustment {
    /// Override with every field unset.
    pub const NONE: Self = Self {
        hue_shift: None,
        saturation_multiplier: None,
        lightness_shift: None,
    };

    pub const fn hue(mut self, shift: f64) -> Self {
        self.hue_shift = Some(shift);
        self
    }

    pub const fn saturation(mut self, multiplier: f64) -> Self {
        self.saturation_multiplier = Some(multiplier);
        self
    }

    pub const fn lightness(mut self, shift: f64) -> Self {
        self.lightness_shift = Some(shift);
        self
    }

    /// Hue shift, 0 when unset.
    #[inline]
    pub fn hue_shift_or_neutral(&self) -> f64 {
        self.hue_shift.unwrap_or(0.0)
    }

    /// Saturation multiplier, 1 when unset.
    #[inline]
    pub fn saturation_multiplier_or_neutral(&self) -> f64 {
        self.saturation_multiplier.unwrap_or(1.0)
    }

    /// Lightness shift, 0 when unset.
    #[inline]
    pub fn lightness_shift_or_neutral(&self) -> f64 {
        self.lightness_shift.unwrap_or(0.0)
    }
}

/// A named global color adjustment preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// Additive hue shift in degrees
    pub hue_shift: f64,
    /// Multiplicative saturation factor
    pub saturation_multiplier: f64,
    /// Additive lightness shift in percent points
    pub lightness_shift: f64,
    /// Category id to override, looked up with a neutral default
    pub category_overrides: &'static [(&'static str, PartialAdjustment)],
}

impl Theme {
    /// Override for `category_id`, or the all-neutral record when the theme
    /// has none.
    pub fn override_for(&self, category_id: &str) -> PartialAdjustment {
        self.category_overrides
            .iter()
            .find(|(id, _)| *id == category_id)
            .map(|(_, adjustment)| *adjustment)
            .unwrap_or(PartialAdjustment::NONE)
    }

    /// True if this theme changes nothing for any category.
    pub fn is_neutral(&self) -> bool {
        self.hue_shift == 0.0
            && self.saturation_multiplier == 1.0
            && self.lightness_shift == 0.0
            && self.category_overrides.is_empty()
    }
}

const ADJ: PartialAdjustment = PartialAdjustment::NONE;

const NEUTRAL: Theme = Theme {
    id: "none",
    name: "None (Default)",
    hue_shift: 0.0,
    saturation_multiplier: 1.0,
    lightness_shift: 0.0,
    category_overrides: &[],
};

/// The identity theme. Unknown theme ids resolve to this.
pub static NEUTRAL_THEME: Theme = NEUTRAL;

/// Built-in themes in menu order. The first entry is the neutral theme.
pub static THEMES: &[Theme] = &[
    NEUTRAL,
    Theme {
        id: "sunset",
        name: "Sunset",
        hue_shift: -20.0,
        saturation_multiplier: 1.1,
        lightness_shift: 5.0,
        category_overrides: &[
            ("wood", ADJ.hue(10.0).saturation(1.2)),
            ("foliage", ADJ.hue(-30.0).saturation(1.3)),
            ("water", ADJ.hue(-60.0).lightness(10.0)),
            ("stone", ADJ.hue(15.0).saturation(0.8)),
            ("emissive", ADJ.hue(-30.0).saturation(1.4)),
        ],
    },
    Theme {
        id: "icy",
        name: "Icy / Winter",
        hue_shift: 30.0,
        saturation_multiplier: 0.7,
        lightness_shift: 15.0,
        category_overrides: &[
            ("wood", ADJ.saturation(0.5).lightness(-10.0)),
            ("foliage", ADJ.hue(60.0).saturation(0.4)),
            ("water", ADJ.hue(20.0).lightness(20.0)),
            ("stone", ADJ.saturation(0.3).lightness(20.0)),
            ("grass", ADJ.hue(40.0).saturation(0.3)),
        ],
    },
    Theme {
        id: "rustic",
        name: "Rustic / Earthy",
        hue_shift: 10.0,
        saturation_multiplier: 0.85,
        lightness_shift: -10.0,
        category_overrides: &[
            ("wood", ADJ.saturation(1.3).lightness(-5.0)),
            ("metal_raw", ADJ.hue(20.0).saturation(1.2)),
            ("stone", ADJ.hue(15.0).saturation(0.9)),
            ("dirt", ADJ.saturation(1.2)),
            ("foliage", ADJ.hue(20.0).saturation(0.7)),
        ],
    },
    Theme {
        id: "tropical",
        name: "Tropical",
        hue_shift: -10.0,
        saturation_multiplier: 1.3,
        lightness_shift: 5.0,
        category_overrides: &[
            ("foliage", ADJ.saturation(1.5).lightness(10.0)),
            ("water", ADJ.saturation(1.4).lightness(15.0)),
            ("flowers", ADJ.saturation(1.5)),
            ("sand", ADJ.hue(-10.0).lightness(10.0)),
        ],
    },
    Theme {
        id: "midnight",
        name: "Midnight",
        hue_shift: 60.0,
        saturation_multiplier: 0.6,
        lightness_shift: -25.0,
        category_overrides: &[
            ("emissive", ADJ.saturation(1.5).lightness(20.0)),
            ("water", ADJ.hue(40.0).lightness(-15.0)),
            ("foliage", ADJ.saturation(0.4).lightness(-20.0)),
            ("magic", ADJ.saturation(1.6).lightness(15.0)),
        ],
    },
    Theme {
        id: "autumn",
        name: "Autumn",
        hue_shift: -15.0,
        saturation_multiplier: 1.1,
        lightness_shift: -5.0,
        category_overrides: &[
            ("foliage", ADJ.hue(-40.0).saturation(1.4)),
            ("grass", ADJ.hue(-50.0).saturation(1.2)),
            ("wood", ADJ.hue(-10.0).saturation(1.1)),
        ],
    },
    Theme {
        id: "pastel",
        name: "Pastel",
        hue_shift: 0.0,
        saturation_multiplier: 0.5,
        lightness_shift: 25.0,
        category_overrides: &[],
    },
    Theme {
        id: "neon",
        name: "Neon / Cyberpunk",
        hue_shift: 0.0,
        saturation_multiplier: 1.5,
        lightness_shift: 0.0,
        category_overrides: &[
            ("emissive", ADJ.saturation(1.8).lightness(15.0)),
            ("magic", ADJ.saturation(1.8).lightness(10.0)),
            ("plastic", ADJ.saturation(1.6).lightness(10.0)),
            ("metal_raw", ADJ.hue(60.0).saturation(0.3)),
        ],
    },
];
