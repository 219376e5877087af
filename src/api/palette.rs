use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use swatch_engine::PaletteState;

use super::query::SelectionParams;
use crate::error::ApiError;
use crate::models::RenderOptions;
use crate::rendering::EXPORT_FILENAME;
use crate::services::PaletteService;

/// Query parameters for the palette texture
#[derive(Debug, Default, Deserialize)]
pub struct PaletteQuery {
    pub theme: Option<String>,
    pub warmth: Option<i32>,
    pub colorblind: Option<String>,
    pub select: Option<String>,
    pub omit_unselected: Option<bool>,
    pub labels: Option<bool>,
    pub borders: Option<bool>,
    pub grid: Option<bool>,
}

impl PaletteQuery {
    pub fn selection(&self) -> SelectionParams<'_> {
        SelectionParams {
            theme: self.theme.as_deref(),
            warmth: self.warmth,
            colorblind: self.colorblind.as_deref(),
            select: self.select.as_deref(),
            omit_unselected: self.omit_unselected,
        }
    }

    /// Configured decorations with the query's overrides
    pub fn render_options(&self, base: RenderOptions) -> RenderOptions {
        RenderOptions {
            labels: self.labels.unwrap_or(base.labels),
            borders: self.borders.unwrap_or(base.borders),
            grid: self.grid.unwrap_or(base.grid),
            optimize: base.optimize,
        }
    }
}

/// Render the palette texture
///
/// Without `select` the selection loaded at startup is used.
#[utoipa::path(
    get,
    path = "/api/palette.png",
    responses(
        (status = 200, description = "Palette texture", content_type = "image/png"),
        (status = 400, description = "Malformed query parameter"),
        (status = 500, description = "Rendering failed"),
    ),
    params(
        ("theme" = Option<String>, Query, description = "Theme id, unknown ids fall back to 'none'"),
        ("warmth" = Option<i32>, Query, description = "Extra hue shift in degrees"),
        ("colorblind" = Option<String>, Query, description = "Colorblind simulation id"),
        ("select" = Option<String>, Query, description = "Comma-separated category ids, or 'all'"),
        ("omit_unselected" = Option<bool>, Query, description = "Leave unselected categories off the texture"),
        ("labels" = Option<bool>, Query, description = "Draw category names"),
        ("borders" = Option<bool>, Query, description = "Outline regions"),
        ("grid" = Option<bool>, Query, description = "Draw the debug grid"),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(
    State(service): State<Arc<PaletteService>>,
    State(base_state): State<Arc<PaletteState>>,
    State(base_options): State<RenderOptions>,
    Query(query): Query<PaletteQuery>,
) -> Result<Response, ApiError> {
    let state = query.selection().resolve(&base_state);
    let options = query.render_options(base_options);

    let png_bytes = service.render_png(state, options).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, png_bytes.len().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        png_bytes,
    )
        .into_response())
}
