//! Palette state
//!
//! [`PaletteState`] is the single mutable input of the engine. It is owned by
//! the caller and passed by reference into recomputation and hit-testing;
//! every setter is a discrete action and nothing is recomputed implicitly.

use std::collections::HashSet;

use crate::adjust::Adjustment;
use crate::catalog::{Catalog, Category, Theme};
use crate::colorblind::ColorblindMode;

/// User-controlled palette settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    catalog: Catalog,
    selected: HashSet<&'static str>,
    theme: &'static Theme,
    warmth_bias: i32,
    colorblind: ColorblindMode,
    omit_unselected: bool,
}

impl PaletteState {
    /// Fresh state: nothing selected, neutral theme, no warmth, no
    /// simulation, unselected categories drawn as placeholders.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: HashSet::new(),
            theme: catalog.theme("none"),
            warmth_bias: 0,
            colorblind: ColorblindMode::None,
            omit_unselected: false,
        }
    }

    /// Batch-initialize from a persisted snapshot.
    ///
    /// Replaces the current selection. Ids not in the catalog are dropped
    /// silently. Theme, warmth and colorblind mode are left untouched.
    pub fn restore<I, S>(&mut self, selected_ids: I, omit_unselected: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let catalog = self.catalog;
        self.selected = selected_ids
            .into_iter()
            .filter_map(|id| catalog.category(id.as_ref()).map(|c| c.id))
            .collect();
        self.omit_unselected = omit_unselected;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Flip the selection of `id`. Returns false if `id` is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(category) = self.catalog.category(id) else {
            return false;
        };
        if !self.selected.remove(category.id) {
            self.selected.insert(category.id);
        }
        true
    }

    /// Select `id`. Returns false if `id` is unknown.
    pub fn select(&mut self, id: &str) -> bool {
        match self.catalog.category(id) {
            Some(category) => {
                self.selected.insert(category.id);
                true
            }
            None => false,
        }
    }

    /// Deselect `id`. Returns false if `id` is unknown.
    pub fn deselect(&mut self, id: &str) -> bool {
        match self.catalog.category(id) {
            Some(category) => {
                self.selected.remove(category.id);
                true
            }
            None => false,
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.catalog.categories().iter().map(|c| c.id).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Activate theme `id`. Unknown ids fall back to the neutral theme.
    pub fn set_theme(&mut self, id: &str) {
        self.theme = self.catalog.theme(id);
    }

    pub fn set_warmth(&mut self, warmth_bias: i32) {
        self.warmth_bias = warmth_bias;
    }

    pub fn set_colorblind_mode(&mut self, mode: ColorblindMode) {
        self.colorblind = mode;
    }

    /// Set the colorblind mode by id. Unknown ids fall back to none.
    pub fn set_colorblind_mode_id(&mut self, id: &str) {
        self.colorblind = ColorblindMode::from_id(id);
    }

    pub fn set_omit_unselected(&mut self, omit: bool) {
        self.omit_unselected = omit;
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn warmth_bias(&self) -> i32 {
        self.warmth_bias
    }

    pub fn colorblind_mode(&self) -> ColorblindMode {
        self.colorblind
    }

    pub fn omit_unselected(&self) -> bool {
        self.omit_unselected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in catalog order.
    pub fn selected_ids(&self) -> Vec<&'static str> {
        self.catalog
            .categories()
            .iter()
            .filter(|c| self.selected.contains(c.id))
            .map(|c| c.id)
            .collect()
    }

    /// Whether `category` occupies a region on the surface at all.
    pub fn is_rendered(&self, category: &Category) -> bool {
        !self.omit_unselected || self.is_selected(category.id)
    }

    /// Categories that occupy a region, in catalog order.
    pub fn rendered_categories(&self) -> impl Iterator<Item = &'static Category> + '_ {
        self.catalog
            .categories()
            .iter()
            .filter(move |c| self.is_rendered(c))
    }

    /// Resolved adjustment for `category_id` under the current theme and
    /// warmth.
    pub fn adjustment_for(&self, category_id: &str) -> Adjustment {
        Adjustment::compose(self.theme, self.warmth_bias, category_id)
    }

    /// Canonical one-line description of the state. Equal states produce
    /// equal fingerprints.
    pub fn fingerprint(&self) -> String {
        format!(
            "theme={};warmth={};colorblind={};omit={};selected={}",
            self.theme.id,
            self.warmth_bias,
            self.colorblind.id(),
            self.omit_unselected,
            self.selected_ids().join(",")
        )
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new(Catalog::BUILTIN)
    }
}
