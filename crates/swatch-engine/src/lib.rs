//! swatch-engine: procedural material swatches for low-poly palette textures
//!
//! A palette texture is a single square image where each material category
//! (wood, stone, water, ...) owns a rectangular block of small tiles. Every
//! tile's color is computed from the category's HSL ranges, nudged by the
//! active theme and warmth bias, and optionally passed through a colorblind
//! simulation. Models then UV-map faces onto individual tiles.
//!
//! # Quick Start
//!
//! ```
//! use swatch_engine::{Frame, LayoutEngine, PaletteState, Surface};
//!
//! let mut state = PaletteState::default();
//! state.select("wood");
//! state.select("foliage");
//! state.set_theme("autumn");
//!
//! let layout = LayoutEngine::default();
//! let frame = Frame::compute(&state, &layout);
//! let surface = Surface::render(&frame, &layout);
//!
//! assert_eq!(surface.width(), 1024);
//! assert_eq!(surface.as_bytes().len(), 1024 * 1024 * 3);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PaletteState ──► Adjustment::compose   (theme + override + warmth)
//!                        │
//!                        ▼
//!                  base_hsl(x, y)         (range interpolation)
//!                        │
//!                        ▼
//!                  Adjustment::apply      (wrap hue, clamp s / l)
//!                        │
//!                        ▼
//!                  Hsl::to_rgb8
//!                        │
//!                        ▼
//!                  ColorblindMode::apply  (3x3 matrix, round, clamp)
//!                        │
//!                        ▼
//!                  Frame ──► Surface      (LayoutEngine places regions)
//! ```
//!
//! Unselected categories skip the pipeline and get a dark two-tone
//! checkerboard, or are left out entirely when the state omits them.
//!
//! # Hit testing
//!
//! [`LayoutEngine::hit_test`] maps a pointer position (already divided by
//! any display zoom) back to the category under it, and
//! [`LayoutEngine::highlight`] returns the rectangle to outline:
//!
//! ```
//! use swatch_engine::{LayoutEngine, PaletteState};
//!
//! let state = PaletteState::default();
//! let layout = LayoutEngine::default();
//!
//! let hit = layout.hit_test(&state, 40.0, 40.0).unwrap();
//! assert_eq!(hit.id, "wood");
//! assert!(!layout.highlight(hit).label_above);
//! ```
//!
//! # Errors
//!
//! There are none. Unknown theme and colorblind ids fall back to their
//! neutral values, unknown category ids are ignored, and every numeric
//! output is clamped into range.

pub mod adjust;
pub mod catalog;
pub mod color;
pub mod colorblind;
pub mod frame;
pub mod generate;
pub mod layout;
pub mod state;
pub mod surface;

mod domain_tests;

pub use adjust::{wrap_hue, Adjustment, LIGHTNESS_CEILING, LIGHTNESS_FLOOR};
pub use catalog::{
    Catalog, Category, ColorRanges, GridPosition, PartialAdjustment, Range, Theme, TileSize,
    CATEGORIES, NEUTRAL_THEME, THEMES,
};
pub use color::{Hsl, Rgb8};
pub use colorblind::ColorblindMode;
pub use frame::{Frame, Region};
pub use generate::{
    base_hsl, generate_category_colors, generate_placeholder, tile_color, tile_hsl, ColorGrid,
    PLACEHOLDER_DARK, PLACEHOLDER_LIGHT,
};
pub use layout::{
    row_of, Highlight, LayoutEngine, LayoutParams, PixelRect, CANVAS_SIZE, GRID_SIZE,
    LABEL_HEIGHT, OVERFLOW_ROW, PADDING_TILES, TILE_SIZE,
};
pub use state::PaletteState;
pub use surface::{Surface, BACKGROUND};
