use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use swatch_engine::{LayoutEngine, PaletteState};
use utoipa::ToSchema;

use super::catalog::CategoryInfo;
use super::query::SelectionParams;
use crate::error::ApiError;
use crate::models::{DisplayHighlight, Viewport};

/// Query parameters for a pointer hit test
///
/// The selection fields are repeated here rather than flattened since
/// `serde(flatten)` loses numeric parsing for query strings.
#[derive(Debug, Default, Deserialize)]
pub struct HitQuery {
    pub x: f64,
    pub y: f64,
    pub zoom: Option<f64>,
    pub theme: Option<String>,
    pub warmth: Option<i32>,
    pub colorblind: Option<String>,
    pub select: Option<String>,
    pub omit_unselected: Option<bool>,
}

impl HitQuery {
    pub fn selection(&self) -> SelectionParams<'_> {
        SelectionParams {
            theme: self.theme.as_deref(),
            warmth: self.warmth,
            colorblind: self.colorblind.as_deref(),
            select: self.select.as_deref(),
            omit_unselected: self.omit_unselected,
        }
    }
}

/// Result of a hit test; `category` and `highlight` are null on a miss
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HitResponse {
    /// Pointer position in native surface pixels
    pub native: [f64; 2],
    pub zoom: f64,
    /// Zoom as a rounded percentage, e.g. 150
    pub zoom_percent: u32,
    /// Edge length of the texture at this zoom, in client pixels
    pub display_size: f64,
    pub category: Option<CategoryInfo>,
    pub selected: bool,
    /// Highlight rectangle in client coordinates
    pub highlight: Option<DisplayHighlight>,
}

/// Resolve a client pointer position against a palette state
pub fn hit(
    layout: &LayoutEngine,
    state: &PaletteState,
    viewport: Viewport,
    x: f64,
    y: f64,
) -> Result<HitResponse, ApiError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ApiError::BadRequest(format!(
            "Pointer coordinates must be finite, got ({x}, {y})"
        )));
    }

    let (native_x, native_y) = viewport.to_native(x, y);
    let category = layout.hit_test(state, native_x, native_y);

    if let Some(c) = category {
        tracing::debug!(category = c.id, x = native_x, y = native_y, "Pointer hit");
    }

    Ok(HitResponse {
        native: [native_x, native_y],
        zoom: viewport.zoom(),
        zoom_percent: viewport.percent(),
        display_size: viewport.display_size(layout.params().canvas_size),
        selected: category.is_some_and(|c| state.is_selected(c.id)),
        highlight: category.map(|c| viewport.to_display(&layout.highlight(c))),
        category: category.map(CategoryInfo::from),
    })
}

/// Find the category under a pointer position
///
/// Coordinates are client pixels at the given zoom; they are divided by the
/// zoom before the lookup.
#[utoipa::path(
    get,
    path = "/api/hit",
    responses(
        (status = 200, description = "Hit test result", body = HitResponse),
        (status = 400, description = "Missing or malformed coordinates"),
    ),
    params(
        ("x" = f64, Query, description = "Pointer x in client pixels"),
        ("y" = f64, Query, description = "Pointer y in client pixels"),
        ("zoom" = Option<f64>, Query, description = "Display zoom, clamped to 0.5..8"),
        ("theme" = Option<String>, Query, description = "Theme id"),
        ("warmth" = Option<i32>, Query, description = "Extra hue shift in degrees"),
        ("colorblind" = Option<String>, Query, description = "Colorblind simulation id"),
        ("select" = Option<String>, Query, description = "Comma-separated category ids, or 'all'"),
        ("omit_unselected" = Option<bool>, Query, description = "Unselected categories cannot be hit"),
    ),
    tag = "Palette"
)]
pub async fn handle_hit(
    State(layout): State<LayoutEngine>,
    State(base_state): State<Arc<PaletteState>>,
    Query(query): Query<HitQuery>,
) -> Result<Json<HitResponse>, ApiError> {
    let state = query.selection().resolve(&base_state);
    let viewport = Viewport::new(query.zoom.unwrap_or(1.0));
    hit(&layout, &state, viewport, query.x, query.y).map(Json)
}
