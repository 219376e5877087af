//! Palette state from query parameters
//!
//! Every endpoint that depends on a palette state starts from the state
//! loaded at startup and applies whatever the query overrides. Unknown
//! theme, colorblind and category ids fall back the same way the engine
//! does, so a stale link still renders.

use swatch_engine::{ColorblindMode, PaletteState};

/// Query fields that shape a palette state
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionParams<'a> {
    pub theme: Option<&'a str>,
    pub warmth: Option<i32>,
    pub colorblind: Option<&'a str>,
    pub select: Option<&'a str>,
    pub omit_unselected: Option<bool>,
}

impl SelectionParams<'_> {
    /// Copy of `base` with the given overrides applied
    pub fn resolve(&self, base: &PaletteState) -> PaletteState {
        let mut state = base.clone();
        if let Some(theme) = self.theme {
            state.set_theme(theme);
        }
        if let Some(warmth) = self.warmth {
            state.set_warmth(warmth);
        }
        if let Some(colorblind) = self.colorblind {
            state.set_colorblind_mode(ColorblindMode::from_id(colorblind));
        }
        if let Some(select) = self.select {
            apply_select(&mut state, select);
        }
        if let Some(omit) = self.omit_unselected {
            state.set_omit_unselected(omit);
        }
        state
    }
}

/// Replace the selection from a `select` value: `all`, or a comma list of ids
pub fn apply_select(state: &mut PaletteState, select: &str) {
    let select = select.trim();
    if select.eq_ignore_ascii_case("all") {
        state.select_all();
        return;
    }
    state.clear();
    for id in select.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        if !state.select(id) {
            tracing::debug!(id, "Ignoring unknown category id");
        }
    }
}
