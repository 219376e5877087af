//! Domain-critical regression tests for swatch-engine.
//!
//! Each test names the failure it guards against rather than only
//! confirming a happy path.

#[cfg(test)]
mod domain_tests {
    use crate::adjust::Adjustment;
    use crate::catalog::{
        Catalog, Category, ColorRanges, GridPosition, Range, TileSize, CATEGORIES, THEMES,
    };
    use crate::color::{Hsl, Rgb8};
    use crate::colorblind::ColorblindMode;
    use crate::frame::Frame;
    use crate::generate::{generate_category_colors, tile_hsl};
    use crate::layout::LayoutEngine;
    use crate::state::PaletteState;
    use crate::surface::Surface;

    fn flat_category(width: u32, height: u32, hue: [f64; 2], sat: f64, light: f64) -> Category {
        Category {
            id: "probe",
            name: "Probe",
            description: "Synthetic category",
            tiles: TileSize { width, height },
            position: GridPosition { x: 0, y: 0 },
            colors: ColorRanges {
                hue: Range::new(hue[0], hue[1]),
                saturation: Range::new(sat, sat),
                lightness: Range::new(light, light),
            },
        }
    }

    // ========================================================================
    // Color bounds
    // ========================================================================

    /// If this breaks, it means: some theme/warmth combination pushes a
    /// channel or lightness value out of range instead of being clamped.
    #[test]
    fn test_every_theme_and_warmth_stays_in_range() {
        for theme in THEMES {
            for warmth in [-180, -30, 0, 30, 720] {
                for category in CATEGORIES {
                    let adjustment = Adjustment::compose(theme, warmth, category.id);
                    for y in 0..category.tiles.height {
                        for x in 0..category.tiles.width {
                            let hsl = tile_hsl(category, &adjustment, x, y);
                            assert!(
                                (0.0..360.0).contains(&hsl.hue),
                                "REGRESSION: hue {} for {} under {}",
                                hsl.hue,
                                category.id,
                                theme.id
                            );
                            assert!((0.0..=100.0).contains(&hsl.saturation));
                            assert!((5.0..=95.0).contains(&hsl.lightness));
                        }
                    }
                }
            }
        }
    }

    /// If this breaks, it means: hue is added without wrapping, so a shift
    /// past 360 feeds an out-of-range hue into the RGB conversion.
    #[test]
    fn test_hue_wraps_forward() {
        let adjustment = Adjustment {
            hue_adjust: 30.0,
            ..Adjustment::NEUTRAL
        };
        let wrapped = adjustment.apply(Hsl::new(350.0, 50.0, 50.0));
        assert!((wrapped.hue - 20.0).abs() < 1e-9, "got {}", wrapped.hue);

        let backwards = Adjustment {
            hue_adjust: -400.0,
            ..Adjustment::NEUTRAL
        };
        let wrapped = backwards.apply(Hsl::new(10.0, 50.0, 50.0));
        assert!((wrapped.hue - 330.0).abs() < 1e-9, "got {}", wrapped.hue);
    }

    /// If this breaks, it means: a dark theme drives lightness negative
    /// instead of stopping at the floor.
    #[test]
    fn test_midnight_clamps_dark_lightness() {
        let midnight = Catalog::BUILTIN.theme("midnight");
        assert_eq!(midnight.lightness_shift, -25.0);

        let category = flat_category(3, 3, [200.0, 220.0], 30.0, 10.0);
        let adjustment = Adjustment::compose(midnight, 0, category.id);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(tile_hsl(&category, &adjustment, x, y).lightness, 5.0);
            }
        }
    }

    /// If this breaks, it means: the interpolation axes are swapped. Hue must
    /// vary with y only, lightness with x only.
    #[test]
    fn test_four_by_four_scenario() {
        let category = flat_category(4, 4, [0.0, 40.0], 50.0, 50.0);
        let adjustment = Adjustment::compose(Catalog::BUILTIN.theme("none"), 0, category.id);

        let origin = tile_hsl(&category, &adjustment, 0, 0);
        assert_eq!((origin.hue, origin.lightness), (0.0, 50.0));

        let right = tile_hsl(&category, &adjustment, 3, 0);
        assert_eq!((right.hue, right.lightness), (0.0, 50.0));

        let one_down = tile_hsl(&category, &adjustment, 0, 1);
        assert!((one_down.hue - 40.0 / 3.0).abs() < 1e-9);

        let bottom = tile_hsl(&category, &adjustment, 0, 3);
        assert!((bottom.hue - 40.0).abs() < 1e-9);
        assert_eq!(bottom.lightness, 50.0);
    }

    /// If this breaks, it means: a one-tile axis divides by zero and yields
    /// NaN colors.
    #[test]
    fn test_single_tile_category_is_defined() {
        let category = flat_category(1, 1, [120.0, 240.0], 60.0, 40.0);
        let grid =
            generate_category_colors(&category, &Adjustment::NEUTRAL, ColorblindMode::None);
        let expected = Hsl::new(120.0, 60.0, 40.0).to_rgb8();
        assert_eq!(grid.get(0, 0), Some(expected));
    }

    // ========================================================================
    // Colorblind filter
    // ========================================================================

    /// If this breaks, it means: "none" is routed through a matrix and
    /// introduces rounding drift.
    #[test]
    fn test_colorblind_none_is_identity() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(51) {
                    let color = Rgb8::new(r as u8, g as u8, b as u8);
                    assert_eq!(ColorblindMode::None.apply(color), color);
                }
            }
        }
        assert_eq!(ColorblindMode::from_id("not-a-mode"), ColorblindMode::None);
    }

    // ========================================================================
    // Layout and recomputation
    // ========================================================================

    /// If this breaks, it means: omit mode still lays out unselected regions
    /// (or draws anything) when nothing is selected.
    #[test]
    fn test_omit_with_empty_selection_renders_nothing() {
        let mut state = PaletteState::default();
        state.set_omit_unselected(true);
        let layout = LayoutEngine::default();

        let frame = Frame::compute(&state, &layout);
        assert!(frame.is_empty());

        let surface = Surface::render(&frame, &layout);
        assert!(surface.as_bytes().chunks_exact(3).all(|p| p == [10, 10, 10]));
    }

    /// If this breaks, it means: recomputation depends on something other
    /// than the state (iteration order of the selection set, leftover
    /// buffers).
    #[test]
    fn test_recomputation_is_idempotent() {
        let mut state = PaletteState::default();
        for id in ["wood", "gems", "water", "alien", "autumn"] {
            state.select(id);
        }
        state.set_theme("neon");
        state.set_warmth(-12);
        state.set_colorblind_mode(ColorblindMode::Deuteranopia);
        let layout = LayoutEngine::default();

        let first = Surface::render(&Frame::compute(&state, &layout), &layout);
        let second = Surface::render(&Frame::compute(&state, &layout), &layout);
        assert_eq!(first.as_bytes(), second.as_bytes());

        let mut rebuilt = PaletteState::default();
        rebuilt.restore(state.selected_ids(), false);
        rebuilt.set_theme("neon");
        rebuilt.set_warmth(-12);
        rebuilt.set_colorblind_mode(ColorblindMode::Deuteranopia);
        assert_eq!(Frame::compute(&rebuilt, &layout), Frame::compute(&state, &layout));
    }

    /// If this breaks, it means: a row band threshold no longer matches the
    /// catalog and the pointer resolves to a neighbouring region.
    #[test]
    fn test_region_centers_resolve_to_their_category() {
        let mut state = PaletteState::default();
        state.select_all();
        let layout = LayoutEngine::default();
        for (category, rect) in layout.regions(&state) {
            let (cx, cy) = rect.center();
            assert_eq!(
                layout.hit_test(&state, cx, cy).map(|c| c.id),
                Some(category.id)
            );
        }
    }
}
