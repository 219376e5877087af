//! Layout engine
//!
//! Categories live on a logical 256x256 tile grid. On the raster surface
//! each tile is `tile_size` pixels square, the whole sheet is inset by
//! `padding_tiles`, and every horizontal band of categories is pushed down by
//! `label_height` pixels per band so that region labels have room above
//! them.
//!
//! ```text
//! pixel_x = padding + x * tile_size
//! pixel_y = padding + row_of(y) * label_height + y * tile_size
//! ```
//!
//! The inverse query quantizes the pointer to whole tiles first and then
//! compares against the row-adjusted pixel extents, scanning in catalog
//! order.

use crate::catalog::Category;
use crate::state::PaletteState;

/// Tile edge length in pixels.
pub const TILE_SIZE: u32 = 4;
/// Padding around the sheet, in tiles.
pub const PADDING_TILES: u32 = 8;
/// Vertical clearance per layout row for label text, in pixels.
pub const LABEL_HEIGHT: u32 = 18;
/// Edge length of the square output canvas, in pixels.
pub const CANVAS_SIZE: u32 = 1024;
/// Edge length of the logical grid, in tiles.
pub const GRID_SIZE: u32 = CANVAS_SIZE / TILE_SIZE;

/// Layout rows as `(y_upper_bound, row_index)` pairs, checked in order.
///
/// `y` below the bound selects the row. The first entry only matches the
/// top band at `y == 0`. Anything past the last bound is [`OVERFLOW_ROW`].
/// The bounds are tied to the built-in catalog; adding positions means
/// re-checking that laid-out regions still do not overlap.
pub const ROW_BANDS: &[(u32, u32)] = &[(1, 0), (80, 1), (112, 2), (136, 3), (160, 4)];

/// Row index for categories below every band in [`ROW_BANDS`].
pub const OVERFLOW_ROW: u32 = 5;

/// Layout row of a category whose top edge is at tile row `y`.
pub fn row_of(y: u32) -> u32 {
    ROW_BANDS
        .iter()
        .find(|&&(bound, _)| y < bound)
        .map(|&(_, row)| row)
        .unwrap_or(OVERFLOW_ROW)
}

/// Axis-aligned rectangle in native surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Center point, which may fall between pixels.
    pub fn center(&self) -> (f64, f64) {
        (
            self.left as f64 + self.width as f64 / 2.0,
            self.top as f64 + self.height as f64 / 2.0,
        )
    }
}

/// Geometry of the output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Padding around the sheet, in tiles
    pub padding_tiles: u32,
    /// Extra vertical pixels per layout row
    pub label_height: u32,
    /// Canvas edge length in pixels
    pub canvas_size: u32,
}

impl LayoutParams {
    /// Padding in pixels, saturating at `u32::MAX`.
    pub fn padding_px(&self) -> u32 {
        self.padding_tiles.saturating_mul(self.tile_size)
    }

    /// Logical grid edge length in tiles.
    pub fn grid_size(&self) -> u32 {
        self.canvas_size / self.tile_size.max(1)
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            padding_tiles: PADDING_TILES,
            label_height: LABEL_HEIGHT,
            canvas_size: CANVAS_SIZE,
        }
    }
}

/// Hover highlight for a matched region, in native pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Region sits in the lower half of the sheet; place its label above
    pub label_above: bool,
}

impl Highlight {
    /// Scale by a display zoom factor.
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            left: self.left * scale,
            top: self.top * scale,
            width: self.width * scale,
            height: self.height * scale,
            label_above: self.label_above,
        }
    }
}

/// Forward and inverse mapping between categories and surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutEngine {
    params: LayoutParams,
}

impl LayoutEngine {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Pixel offset of a category's layout row.
    fn row_offset(&self, category: &Category) -> u32 {
        row_of(category.position.y).saturating_mul(self.params.label_height)
    }

    /// Region rectangle of `category` on the surface.
    ///
    /// Coordinates saturate instead of overflowing, so oversized parameters
    /// push regions off the canvas rather than wrapping around.
    pub fn region(&self, category: &Category) -> PixelRect {
        let t = self.params.tile_size;
        let padding = self.params.padding_px();
        PixelRect::new(
            padding.saturating_add(category.position.x.saturating_mul(t)),
            padding
                .saturating_add(self.row_offset(category))
                .saturating_add(category.position.y.saturating_mul(t)),
            category.tiles.width.saturating_mul(t),
            category.tiles.height.saturating_mul(t),
        )
    }

    /// Pixel cell of tile (`x`, `y`) inside `category`.
    pub fn tile_rect(&self, category: &Category, x: u32, y: u32) -> PixelRect {
        let region = self.region(category);
        let t = self.params.tile_size;
        PixelRect::new(
            region.left.saturating_add(x.saturating_mul(t)),
            region.top.saturating_add(y.saturating_mul(t)),
            t,
            t,
        )
    }

    /// Regions of every category `state` renders, in catalog order.
    pub fn regions<'a>(
        &'a self,
        state: &'a PaletteState,
    ) -> impl Iterator<Item = (&'static Category, PixelRect)> + 'a {
        state
            .rendered_categories()
            .map(move |category| (category, self.region(category)))
    }

    /// Category under the native-pixel point (`x`, `y`), if any.
    ///
    /// The point is quantized to whole tiles before matching. Non-finite
    /// coordinates match nothing.
    ///
    /// The row label offset is compared after quantization, so in rows whose
    /// offset is not a multiple of the tile size (rows 1, 3 and 5 with the
    /// default 18px labels and 4px tiles) the matched band sits 2px above the
    /// drawn region: its top 2px miss and the 2px below its bottom edge hit.
    /// This is the established pointer behaviour and is kept as is.
    pub fn hit_test(&self, state: &PaletteState, x: f64, y: f64) -> Option<&'static Category> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let t = self.params.tile_size.max(1) as f64;
        let tile_x = (x / t).floor() as i64;
        let tile_y = (y / t).floor() as i64;
        self.hit_test_tile(state, tile_x, tile_y)
    }

    /// Category under surface tile (`tile_x`, `tile_y`), padding included.
    pub fn hit_test_tile(
        &self,
        state: &PaletteState,
        tile_x: i64,
        tile_y: i64,
    ) -> Option<&'static Category> {
        let t = self.params.tile_size as i64;
        let padding = self.params.padding_tiles as i64;
        let adjusted_x = tile_x.saturating_sub(padding);
        let adjusted_y_px = tile_y.saturating_sub(padding).saturating_mul(t);

        state.rendered_categories().find(|category| {
            let left = category.position.x as i64;
            let right = left + category.tiles.width as i64;
            let top = self.row_offset(category) as i64 + category.position.y as i64 * t;
            let bottom = top + category.tiles.height as i64 * t;
            (left..right).contains(&adjusted_x) && (top..bottom).contains(&adjusted_y_px)
        })
    }

    /// Highlight descriptor for `category`.
    pub fn highlight(&self, category: &Category) -> Highlight {
        let region = self.region(category);
        let center_y = category.position.y as f64 + category.tiles.height as f64 / 2.0;
        Highlight {
            left: region.left as f64,
            top: region.top as f64,
            width: region.width as f64,
            height: region.height as f64,
            label_above: center_y > self.params.grid_size() as f64 / 2.0,
        }
    }

    /// Whether `category` lies entirely inside the canvas.
    pub fn fits_canvas(&self, category: &Category) -> bool {
        let region = self.region(category);
        region.right() <= self.params.canvas_size && region.bottom() <= self.params.canvas_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn all_selected() -> PaletteState {
        let mut state = PaletteState::default();
        state.select_all();
        state
    }

    #[test]
    fn test_row_of_bands() {
        assert_eq!(row_of(0), 0);
        assert_eq!(row_of(1), 1);
        assert_eq!(row_of(48), 1);
        assert_eq!(row_of(79), 1);
        assert_eq!(row_of(80), 2);
        assert_eq!(row_of(111), 2);
        assert_eq!(row_of(112), 3);
        assert_eq!(row_of(136), 4);
        assert_eq!(row_of(159), 4);
        assert_eq!(row_of(160), 5);
        assert_eq!(row_of(255), 5);
    }

    #[test]
    fn test_forward_mapping() {
        let layout = LayoutEngine::default();
        let catalog = Catalog::BUILTIN;

        let wood = catalog.category("wood").unwrap();
        assert_eq!(layout.region(wood), PixelRect::new(32, 32, 192, 192));

        // stone: (0, 48) on row 1
        let stone = catalog.category("stone").unwrap();
        assert_eq!(layout.region(stone), PixelRect::new(32, 32 + 18 + 192, 128, 128));

        // alien: (0, 160) on the overflow row
        let alien = catalog.category("alien").unwrap();
        assert_eq!(layout.region(alien).top, 32 + 5 * 18 + 640);

        assert_eq!(layout.tile_rect(wood, 2, 3), PixelRect::new(40, 44, 4, 4));
    }

    #[test]
    fn test_no_regions_overlap() {
        let layout = LayoutEngine::default();
        let categories = Catalog::BUILTIN.categories();
        for (i, a) in categories.iter().enumerate() {
            for b in &categories[i + 1..] {
                assert!(
                    !layout.region(a).intersects(&layout.region(b)),
                    "{} overlaps {}",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn test_every_region_fits_canvas() {
        let layout = LayoutEngine::default();
        for category in Catalog::BUILTIN.categories() {
            assert!(layout.fits_canvas(category), "{} off canvas", category.id);
        }
    }

    #[test]
    fn test_hit_test_at_every_tile_center() {
        let layout = LayoutEngine::default();
        let state = all_selected();
        for category in Catalog::BUILTIN.categories() {
            for y in 0..category.tiles.height {
                for x in 0..category.tiles.width {
                    let (cx, cy) = layout.tile_rect(category, x, y).center();
                    let hit = layout.hit_test(&state, cx, cy).map(|c| c.id);
                    assert_eq!(hit, Some(category.id), "tile ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_hit_test_outside_matches_nothing() {
        let layout = LayoutEngine::default();
        let state = all_selected();
        assert_eq!(layout.hit_test(&state, 0.0, 0.0), None);
        assert_eq!(layout.hit_test(&state, -50.0, 100.0), None);
        assert_eq!(layout.hit_test(&state, 5000.0, 5000.0), None);
        assert_eq!(layout.hit_test(&state, 1000.0, 1000.0), None);
        assert_eq!(layout.hit_test(&state, f64::NAN, 40.0), None);
        assert_eq!(layout.hit_test(&state, 40.0, f64::INFINITY), None);
    }

    #[test]
    fn test_hit_test_skips_omitted() {
        let layout = LayoutEngine::default();
        let mut state = PaletteState::default();
        let wood = Catalog::BUILTIN.category("wood").unwrap();
        let (cx, cy) = layout.region(wood).center();

        assert_eq!(layout.hit_test(&state, cx, cy).map(|c| c.id), Some("wood"));

        state.set_omit_unselected(true);
        assert_eq!(layout.hit_test(&state, cx, cy), None);

        state.select("wood");
        assert_eq!(layout.hit_test(&state, cx, cy).map(|c| c.id), Some("wood"));
    }

    #[test]
    fn test_highlight_label_placement() {
        let layout = LayoutEngine::default();
        let catalog = Catalog::BUILTIN;

        let wood = layout.highlight(catalog.category("wood").unwrap());
        assert_eq!((wood.left, wood.top, wood.width, wood.height), (32.0, 32.0, 192.0, 192.0));
        assert!(!wood.label_above);

        // alien: 160 + 20 / 2 = 170 > 128
        assert!(layout.highlight(catalog.category("alien").unwrap()).label_above);

        let scaled = wood.scaled(0.5);
        assert_eq!((scaled.left, scaled.width), (16.0, 96.0));
    }

    #[test]
    fn test_regions_follow_state() {
        let layout = LayoutEngine::default();
        let mut state = PaletteState::default();
        state.set_omit_unselected(true);
        assert_eq!(layout.regions(&state).count(), 0);

        state.select("moss");
        state.select("bark");
        let ids: Vec<_> = layout.regions(&state).map(|(c, _)| c.id).collect();
        assert_eq!(ids, vec!["bark", "moss"]);
    }

    #[test]
    fn test_custom_params() {
        let params = LayoutParams {
            tile_size: 2,
            padding_tiles: 4,
            label_height: 10,
            canvas_size: 512,
        };
        assert_eq!(params.padding_px(), 8);
        assert_eq!(params.grid_size(), 256);

        let layout = LayoutEngine::new(params);
        let stone = Catalog::BUILTIN.category("stone").unwrap();
        assert_eq!(layout.region(stone), PixelRect::new(8, 8 + 10 + 96, 64, 64));
    }

    #[test]
    fn test_hit_band_is_tile_quantized() {
        let layout = LayoutEngine::default();
        let state = PaletteState::default();
        let stone = Catalog::BUILTIN.category("stone").unwrap();
        let region = layout.region(stone);
        assert_eq!(region, PixelRect::new(32, 242, 128, 128));

        let x = region.left as f64 + 10.0;
        let hit = |y: f64| layout.hit_test(&state, x, y).map(|c| c.id);
        assert_eq!(hit(region.top as f64), None);
        assert_eq!(hit(region.top as f64 + 2.0), Some("stone"));
        assert_eq!(hit(region.bottom() as f64 - 1.0), Some("stone"));
        assert_eq!(hit(region.bottom() as f64 + 1.0), Some("stone"));
    }

    #[test]
    fn test_oversized_params_saturate() {
        let layout = LayoutEngine::new(LayoutParams {
            padding_tiles: 2_000_000_000,
            label_height: u32::MAX,
            ..LayoutParams::default()
        });
        let mut state = PaletteState::default();
        state.select_all();

        for (category, rect) in layout.regions(&state) {
            assert_eq!(rect.left, u32::MAX, "{}", category.id);
            assert!(!layout.fits_canvas(category));
        }
        assert_eq!(layout.hit_test(&state, 40.0, 40.0), None);
        assert_eq!(LayoutEngine::default().hit_test(&state, -1e300, 1e300), None);
        assert_eq!(LayoutEngine::default().hit_test_tile(&state, i64::MIN, i64::MAX), None);

        let surface = crate::Surface::render(&crate::Frame::compute(&state, &layout), &layout);
        assert_eq!(surface.pixel(40, 40), Some(crate::BACKGROUND));
    }
}
