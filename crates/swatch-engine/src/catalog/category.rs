//! Material categories
//!
//! The built-in catalog is the packed 256x256-tile sheet of the low-poly
//! palette texture. Positions and sizes are in tiles; color ranges are in
//! native HSL units.

use crate::color::{Hsl, Rgb8};

/// Size of a category's tile grid, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

/// Top-left corner of a category on the logical tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: u32,
    pub y: u32,
}

/// Closed interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub lo: f64,
    pub hi: f64,
}

impl Range {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Linear interpolation from `lo` (t = 0) to `hi` (t = 1).
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        self.lo + t * (self.hi - self.lo)
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }
}

/// HSL ranges a category's tiles are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRanges {
    /// Hue in degrees, varies top to bottom
    pub hue: Range,
    /// Saturation in percent, varies along the diagonal
    pub saturation: Range,
    /// Lightness in percent, decreases left to right
    pub lightness: Range,
}

/// A material category: one rectangular region of the palette sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    /// Unique key, used for selections and theme overrides
    pub id: &'static str,
    /// Display name, drawn as the region label
    pub name: &'static str,
    pub description: &'static str,
    pub tiles: TileSize,
    pub position: GridPosition,
    pub colors: ColorRanges,
}

impl Category {
    /// Representative color for listings.
    ///
    /// Midpoint hue, saturation boosted by 10 points and lightness capped at
    /// 50 so light materials still read as colored. Not affected by themes.
    pub fn swatch_color(&self) -> Rgb8 {
        let colors = &self.colors;
        Hsl::new(
            colors.hue.midpoint(),
            (colors.saturation.midpoint() + 10.0).min(100.0),
            colors.lightness.midpoint().min(50.0),
        )
        .to_rgb8()
    }

    /// Number of tiles in the category's grid.
    pub fn tile_count(&self) -> u32 {
        self.tiles.width * self.tiles.height
    }
}

#[allow(clippy::too_many_arguments)]
const fn category(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    (width, height): (u32, u32),
    (x, y): (u32, u32),
    hue: [f64; 2],
    saturation: [f64; 2],
    lightness: [f64; 2],
) -> Category {
    Category {
        id,
        name,
        description,
        tiles: TileSize { width, height },
        position: GridPosition { x, y },
        colors: ColorRanges {
            hue: Range::new(hue[0], hue[1]),
            saturation: Range::new(saturation[0], saturation[1]),
            lightness: Range::new(lightness[0], lightness[1]),
        },
    }
}

/// The built-in catalog, in layout and scan order.
#[rustfmt::skip]
pub static CATEGORIES: &[Category] = &[
    // Row 0: core materials
    category("wood", "Wood", "Light to dark wood tones, warm to cool", (48, 48), (0, 0), [20.0, 40.0], [30.0, 60.0], [25.0, 70.0]),
    category("bark", "Bark", "Darker, textured tree bark tones", (32, 32), (48, 0), [15.0, 35.0], [20.0, 45.0], [15.0, 40.0]),
    category("metal_raw", "Metal (Raw)", "Steel, iron, silver - raw metal surfaces", (40, 40), (80, 0), [200.0, 220.0], [0.0, 15.0], [30.0, 85.0]),
    category("metal_painted", "Painted Metal", "Industrial painted surfaces", (32, 32), (120, 0), [0.0, 360.0], [40.0, 70.0], [35.0, 65.0]),
    category("plastic", "Plastic", "Bright and muted plastic colors", (32, 32), (152, 0), [0.0, 360.0], [50.0, 85.0], [45.0, 75.0]),
    category("rubber", "Rubber", "Dark, low saturation rubber", (24, 24), (184, 0), [0.0, 30.0], [5.0, 20.0], [10.0, 35.0]),
    category("glass", "Glass", "Clear, frosted, and tinted glass", (24, 24), (208, 0), [180.0, 220.0], [10.0, 40.0], [60.0, 95.0]),
    // Row 1: ground and construction
    category("stone", "Stone", "Natural stone and rock surfaces", (32, 32), (0, 48), [20.0, 50.0], [5.0, 20.0], [25.0, 70.0]),
    category("concrete", "Concrete", "Neutral grey concrete", (24, 24), (32, 48), [40.0, 60.0], [0.0, 10.0], [35.0, 65.0]),
    category("brick", "Brick / Masonry", "Red and brown brick shades", (24, 24), (56, 48), [5.0, 25.0], [40.0, 65.0], [25.0, 50.0]),
    category("dirt", "Dirt / Soil", "Warm earth tones", (24, 24), (80, 48), [20.0, 40.0], [30.0, 55.0], [15.0, 40.0]),
    category("sand", "Sand / Gravel", "Light neutral sandy tones", (24, 24), (104, 48), [35.0, 50.0], [20.0, 45.0], [55.0, 85.0]),
    category("foliage", "Foliage", "Leaves and plant greens", (32, 32), (128, 48), [80.0, 140.0], [35.0, 70.0], [25.0, 60.0]),
    category("grass", "Grass / Ground", "Fresh and dry grass", (24, 24), (160, 48), [60.0, 120.0], [30.0, 65.0], [30.0, 55.0]),
    // Row 2: water, cloth and light
    category("snow", "Snow", "White and blue-white shades", (24, 24), (0, 80), [200.0, 220.0], [0.0, 15.0], [85.0, 100.0]),
    category("ice", "Ice", "Cool blue ice tones", (24, 24), (24, 80), [190.0, 210.0], [20.0, 50.0], [65.0, 90.0]),
    category("water", "Water", "Deep to shallow water blues", (24, 24), (48, 80), [190.0, 220.0], [40.0, 70.0], [30.0, 70.0]),
    category("fabric", "Fabric / Cloth", "Varied cloth colors", (24, 24), (72, 80), [0.0, 360.0], [25.0, 60.0], [35.0, 70.0]),
    category("leather", "Leather", "Brown and black leather", (24, 24), (96, 80), [15.0, 35.0], [30.0, 55.0], [15.0, 45.0]),
    category("paper", "Paper / Cardboard", "Warm neutral paper tones", (24, 24), (120, 80), [35.0, 50.0], [15.0, 35.0], [65.0, 90.0]),
    category("emissive", "Emissive", "Bright glowing colors", (24, 24), (144, 80), [0.0, 360.0], [70.0, 100.0], [55.0, 80.0]),
    // Row 3: natural and environmental
    category("coral", "Coral", "Ocean coral and shell tones", (20, 20), (0, 112), [0.0, 40.0], [40.0, 70.0], [60.0, 85.0]),
    category("moss", "Moss", "Damp green moss and lichen", (20, 20), (20, 112), [70.0, 130.0], [25.0, 55.0], [20.0, 45.0]),
    category("flowers", "Flowers", "Colorful flower petals", (20, 20), (40, 112), [280.0, 360.0], [50.0, 85.0], [50.0, 80.0]),
    category("mud", "Mud", "Wet muddy earth tones", (20, 20), (60, 112), [20.0, 35.0], [35.0, 60.0], [10.0, 30.0]),
    category("smoke", "Smoke", "Atmospheric smoke and fog", (20, 20), (80, 112), [200.0, 220.0], [0.0, 10.0], [60.0, 90.0]),
    category("ash", "Ash", "Dark ash and dust particles", (20, 20), (100, 112), [0.0, 30.0], [0.0, 15.0], [15.0, 40.0]),
    category("frost", "Frost", "Crystalline ice and frost", (20, 20), (120, 112), [190.0, 220.0], [30.0, 60.0], [75.0, 98.0]),
    category("water_variants", "Water+", "Shallow, deep, murky water", (20, 20), (140, 112), [180.0, 220.0], [35.0, 75.0], [25.0, 70.0]),
    category("autumn", "Autumn", "Red, orange, yellow fall colors", (20, 20), (160, 112), [10.0, 50.0], [60.0, 90.0], [35.0, 65.0]),
    category("spring", "Spring", "Fresh greens, floral accents", (20, 20), (180, 112), [80.0, 150.0], [50.0, 80.0], [45.0, 75.0]),
    // Row 4: metals and synthetics
    category("rusty_metal", "Rusty", "Corroded iron and steel", (20, 20), (0, 136), [15.0, 35.0], [50.0, 75.0], [20.0, 45.0]),
    category("brushed_metal", "Brushed", "Aluminum, chrome, steel finishes", (20, 20), (20, 136), [200.0, 220.0], [5.0, 20.0], [50.0, 90.0]),
    category("gems", "Gems", "Diamond, ruby, sapphire, emerald", (24, 20), (40, 136), [0.0, 360.0], [60.0, 95.0], [40.0, 75.0]),
    category("ceramic", "Ceramic", "Glazed ceramic and porcelain", (20, 20), (64, 136), [200.0, 240.0], [10.0, 40.0], [70.0, 95.0]),
    category("foam", "Foam", "Soft foam and sponge materials", (20, 20), (84, 136), [40.0, 60.0], [40.0, 70.0], [65.0, 90.0]),
    category("vinyl", "Vinyl", "Glossy or matte vinyl", (20, 20), (104, 136), [0.0, 360.0], [40.0, 80.0], [50.0, 80.0]),
    category("synthetic_fabric", "Synth", "Nylon, polyester, synthetic leather", (20, 20), (124, 136), [0.0, 360.0], [30.0, 60.0], [25.0, 55.0]),
    category("carpet", "Carpet", "Patterned carpet textures", (20, 20), (144, 136), [0.0, 40.0], [30.0, 60.0], [30.0, 55.0]),
    category("winter", "Winter", "Icy blue, white, subtle purple", (20, 20), (164, 136), [200.0, 280.0], [15.0, 45.0], [70.0, 95.0]),
    category("desert", "Desert", "Warm sands, dry foliage", (20, 20), (184, 136), [30.0, 55.0], [35.0, 65.0], [50.0, 80.0]),
    // Row 5: stylized and game
    category("alien", "Alien", "Unusual hues, glowing surfaces", (20, 20), (0, 160), [140.0, 200.0], [60.0, 95.0], [30.0, 65.0]),
    category("magic", "Magic", "Glowing crystals, runes, energy", (20, 20), (20, 160), [260.0, 320.0], [70.0, 100.0], [50.0, 80.0]),
    category("cartoon", "Cartoon", "Saturated or pastel plastics", (20, 20), (40, 160), [0.0, 360.0], [70.0, 100.0], [60.0, 85.0]),
    category("food", "Food", "Bread, fruit, vegetables, meat", (24, 20), (60, 160), [0.0, 60.0], [45.0, 80.0], [35.0, 70.0]),
    category("rubber_variants", "Rubber+", "Colored and transparent rubber", (20, 20), (84, 160), [0.0, 360.0], [20.0, 50.0], [15.0, 40.0]),
    category("sand_variants", "Sand+", "Desert, volcanic, colored sand", (20, 20), (104, 160), [25.0, 50.0], [30.0, 60.0], [45.0, 80.0]),
];
