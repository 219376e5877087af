//! Tile color generation
//!
//! Each tile's base HSL comes from interpolating the category's ranges
//! across its grid:
//!
//! ```text
//! lightness  high ──────────────► low      (x, left to right)
//! hue        lo                            (y, top to bottom)
//!             │
//!             ▼
//!            hi
//! saturation lo at top-left, hi at bottom-right (x + y)
//! ```
//!
//! The resolved [`Adjustment`] is applied to the base color, the result is
//! converted to 8-bit RGB and finally passed through the colorblind filter.

use crate::adjust::Adjustment;
use crate::catalog::Category;
use crate::color::{Hsl, Rgb8};
use crate::colorblind::ColorblindMode;

/// Lighter placeholder grey, on even `(x + y)` cells.
pub const PLACEHOLDER_LIGHT: Rgb8 = Rgb8::grey(25);
/// Darker placeholder grey, on odd `(x + y)` cells.
pub const PLACEHOLDER_DARK: Rgb8 = Rgb8::grey(20);

/// Row-major grid of tile colors for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    width: u32,
    height: u32,
    cells: Vec<Rgb8>,
}

impl ColorGrid {
    /// Build a grid by evaluating `f(x, y)` for every tile.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb8) -> Self {
        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color of tile (`x`, `y`), or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x < self.width && y < self.height {
            Some(self.cells[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// One row of tiles, top to bottom.
    pub fn row(&self, y: u32) -> Option<&[Rgb8]> {
        if y >= self.height {
            return None;
        }
        let start = (y * self.width) as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Rgb8] {
        &self.cells
    }

    /// Iterate `(x, y, color)` in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32, Rgb8)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i as u32 % width, i as u32 / width, c))
    }
}

/// Interpolation parameter for index `i` along an axis with `span + 1`
/// samples. A zero span yields 0 instead of dividing by zero.
#[inline]
fn interpolation(i: u32, span: u32) -> f64 {
    i as f64 / span.max(1) as f64
}

/// Unadjusted HSL of tile (`x`, `y`).
pub fn base_hsl(category: &Category, x: u32, y: u32) -> Hsl {
    let tiles = category.tiles;
    let colors = &category.colors;

    let light_t = interpolation(x, tiles.width.saturating_sub(1));
    let hue_t = interpolation(y, tiles.height.saturating_sub(1));
    let sat_t = interpolation(x + y, (tiles.width + tiles.height).saturating_sub(2));

    // Lightness runs high to low, so interpolate from the top of the range
    let lightness = colors.lightness.hi - light_t * (colors.lightness.hi - colors.lightness.lo);

    Hsl::new(
        colors.hue.lerp(hue_t),
        colors.saturation.lerp(sat_t),
        lightness,
    )
}

/// Adjusted HSL of tile (`x`, `y`), before RGB conversion.
pub fn tile_hsl(category: &Category, adjustment: &Adjustment, x: u32, y: u32) -> Hsl {
    adjustment.apply(base_hsl(category, x, y))
}

/// Final color of a single tile.
pub fn tile_color(
    category: &Category,
    adjustment: &Adjustment,
    colorblind: ColorblindMode,
    x: u32,
    y: u32,
) -> Rgb8 {
    colorblind.apply(tile_hsl(category, adjustment, x, y).to_rgb8())
}

/// Generate the full color grid for a selected category.
///
/// # Example
/// ```
/// use swatch_engine::{generate_category_colors, Adjustment, Catalog, ColorblindMode};
///
/// let wood = Catalog::BUILTIN.category("wood").unwrap();
/// let grid = generate_category_colors(wood, &Adjustment::NEUTRAL, ColorblindMode::None);
/// assert_eq!((grid.width(), grid.height()), (48, 48));
/// ```
pub fn generate_category_colors(
    category: &Category,
    adjustment: &Adjustment,
    colorblind: ColorblindMode,
) -> ColorGrid {
    ColorGrid::from_fn(category.tiles.width, category.tiles.height, |x, y| {
        tile_color(category, adjustment, colorblind, x, y)
    })
}

/// Checkerboard placeholder for an unselected category.
pub fn generate_placeholder(category: &Category) -> ColorGrid {
    ColorGrid::from_fn(category.tiles.width, category.tiles.height, |x, y| {
        if (x + y) % 2 == 0 {
            PLACEHOLDER_LIGHT
        } else {
            PLACEHOLDER_DARK
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ColorRanges, GridPosition, Range, TileSize};

    fn test_category(
        width: u32,
        height: u32,
        hue: [f64; 2],
        sat: [f64; 2],
        light: [f64; 2],
    ) -> Category {
        Category {
            id: "test",
            name: "Test",
            description: "",
            tiles: TileSize { width, height },
            position: GridPosition { x: 0, y: 0 },
            colors: ColorRanges {
                hue: Range::new(hue[0], hue[1]),
                saturation: Range::new(sat[0], sat[1]),
                lightness: Range::new(light[0], light[1]),
            },
        }
    }

    #[test]
    fn test_lightness_decreases_left_to_right() {
        let cat = test_category(5, 3, [0.0, 0.0], [50.0, 50.0], [20.0, 60.0]);
        let row: Vec<f64> = (0..5).map(|x| base_hsl(&cat, x, 1).lightness).collect();
        assert_eq!(row, vec![60.0, 50.0, 40.0, 30.0, 20.0]);
    }

    #[test]
    fn test_hue_increases_top_to_bottom() {
        let cat = test_category(2, 5, [0.0, 80.0], [50.0, 50.0], [50.0, 50.0]);
        let column: Vec<f64> = (0..5).map(|y| base_hsl(&cat, 0, y).hue).collect();
        assert_eq!(column, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn test_saturation_follows_diagonal() {
        let cat = test_category(3, 3, [0.0, 0.0], [10.0, 50.0], [50.0, 50.0]);
        assert_eq!(base_hsl(&cat, 0, 0).saturation, 10.0);
        assert_eq!(base_hsl(&cat, 2, 0).saturation, 30.0);
        assert_eq!(base_hsl(&cat, 0, 2).saturation, 30.0);
        assert_eq!(base_hsl(&cat, 2, 2).saturation, 50.0);
    }

    #[test]
    fn test_single_tile_category_uses_range_start() {
        let cat = test_category(1, 1, [100.0, 200.0], [20.0, 80.0], [30.0, 70.0]);
        let hsl = base_hsl(&cat, 0, 0);
        assert_eq!(hsl.hue, 100.0);
        assert_eq!(hsl.saturation, 20.0);
        // light_t = 0 picks the light end
        assert_eq!(hsl.lightness, 70.0);
    }

    #[test]
    fn test_single_column_and_single_row() {
        let column = test_category(1, 3, [0.0, 60.0], [0.0, 40.0], [40.0, 60.0]);
        assert_eq!(base_hsl(&column, 0, 2).hue, 60.0);
        assert_eq!(base_hsl(&column, 0, 2).lightness, 60.0);
        assert_eq!(base_hsl(&column, 0, 2).saturation, 40.0);

        let row = test_category(3, 1, [0.0, 60.0], [0.0, 40.0], [40.0, 60.0]);
        assert_eq!(base_hsl(&row, 2, 0).hue, 0.0);
        assert_eq!(base_hsl(&row, 2, 0).lightness, 40.0);
    }

    #[test]
    fn test_grid_dimensions_and_indexing() {
        let wood = Catalog::BUILTIN.category("wood").unwrap();
        let grid = generate_category_colors(wood, &Adjustment::NEUTRAL, ColorblindMode::None);
        assert_eq!(grid.cells().len(), 48 * 48);
        assert_eq!(grid.row(0).unwrap().len(), 48);
        assert!(grid.row(48).is_none());
        assert!(grid.get(48, 0).is_none());
        assert_eq!(
            grid.get(7, 3),
            Some(tile_color(wood, &Adjustment::NEUTRAL, ColorblindMode::None, 7, 3))
        );
        assert_eq!(grid.tiles().nth(49).map(|(x, y, _)| (x, y)), Some((1, 1)));
    }

    #[test]
    fn test_placeholder_checkerboard() {
        let cat = test_category(3, 2, [0.0, 0.0], [0.0, 0.0], [0.0, 0.0]);
        let grid = generate_placeholder(&cat);
        assert_eq!(grid.get(0, 0), Some(PLACEHOLDER_LIGHT));
        assert_eq!(grid.get(1, 0), Some(PLACEHOLDER_DARK));
        assert_eq!(grid.get(0, 1), Some(PLACEHOLDER_DARK));
        assert_eq!(grid.get(1, 1), Some(PLACEHOLDER_LIGHT));
        assert_eq!(PLACEHOLDER_LIGHT, Rgb8::grey(25));
        assert_eq!(PLACEHOLDER_DARK, Rgb8::grey(20));
    }

    #[test]
    fn test_colorblind_filter_applied_after_conversion() {
        let cat = test_category(2, 2, [0.0, 0.0], [100.0, 100.0], [50.0, 50.0]);
        let grid =
            generate_category_colors(&cat, &Adjustment::NEUTRAL, ColorblindMode::Achromatopsia);
        let expected = ColorblindMode::Achromatopsia.apply(Rgb8::new(255, 0, 0));
        assert_eq!(grid.get(0, 0), Some(expected));
    }
}
