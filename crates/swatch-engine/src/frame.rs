//! Full recomputation of the palette sheet.

use crate::catalog::Category;
use crate::generate::{generate_category_colors, generate_placeholder, ColorGrid};
use crate::layout::{LayoutEngine, PixelRect};
use crate::state::PaletteState;

/// One laid-out category with its generated colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub category: &'static Category,
    pub rect: PixelRect,
    pub selected: bool,
    pub colors: ColorGrid,
}

/// Every rendered region for one palette state, in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    regions: Vec<Region>,
}

impl Frame {
    /// Recompute all regions from scratch.
    ///
    /// Selected categories get their full color grid; unselected ones get
    /// the placeholder checkerboard, or nothing at all when the state omits
    /// them.
    pub fn compute(state: &PaletteState, layout: &LayoutEngine) -> Self {
        let colorblind = state.colorblind_mode();
        let regions = layout
            .regions(state)
            .map(|(category, rect)| {
                let selected = state.is_selected(category.id);
                let colors = if selected {
                    let adjustment = state.adjustment_for(category.id);
                    generate_category_colors(category, &adjustment, colorblind)
                } else {
                    generate_placeholder(category)
                };
                Region {
                    category,
                    rect,
                    selected,
                    colors,
                }
            })
            .collect();
        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.category.id == id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
