//! Static catalog data: material categories and theme presets.
//!
//! [`Catalog`] bundles a category table with a theme table and provides the
//! fail-open lookups the rest of the engine relies on. The built-in tables
//! are [`CATEGORIES`] and [`THEMES`]; tests and embedders can build a
//! catalog over their own `'static` tables.

mod category;
mod theme;

pub use category::{Category, ColorRanges, GridPosition, Range, TileSize, CATEGORIES};
pub use theme::{PartialAdjustment, Theme, NEUTRAL_THEME, THEMES};

/// A category table paired with a theme table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalog {
    categories: &'static [Category],
    themes: &'static [Theme],
}

impl Catalog {
    /// The built-in material sheet and theme presets.
    pub const BUILTIN: Self = Self::new(CATEGORIES, THEMES);

    pub const fn new(categories: &'static [Category], themes: &'static [Theme]) -> Self {
        Self { categories, themes }
    }

    /// Categories in catalog (scan) order.
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn themes(&self) -> &'static [Theme] {
        self.themes
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a theme by id, without fallback.
    pub fn find_theme(&self, id: &str) -> Option<&'static Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Look up a theme by id. Unknown ids resolve to [`NEUTRAL_THEME`].
    pub fn theme(&self, id: &str) -> &'static Theme {
        self.find_theme(id).unwrap_or(&NEUTRAL_THEME)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::BUILTIN
    }
}
