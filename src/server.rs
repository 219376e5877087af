//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Query, State},
    http::header::CACHE_CONTROL,
    response::Response,
    routing::get,
    Json, Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use swatch_engine::{LayoutEngine, PaletteState};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::{AppConfig, SelectionSnapshot};
use crate::rendering::PaletteRenderer;
use crate::services::PaletteService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service: Arc<PaletteService>,
    /// Starting point for every request's palette state
    pub base_state: Arc<PaletteState>,
}

impl AppState {
    pub fn layout(&self) -> LayoutEngine {
        *self.service.layout()
    }
}

/// Create application state from an asset loader.
///
/// `selections_file` takes precedence over the file named in the config.
pub fn create_app_state(
    asset_loader: Arc<AssetLoader>,
    selections_file: Option<PathBuf>,
) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    let renderer = Arc::new(PaletteRenderer::with_fonts(asset_loader.get_fonts()));
    let layout = LayoutEngine::new(config.layout.params());
    let service = Arc::new(PaletteService::new(renderer, layout));

    let mut base_state = config.base_state();
    if let Some(path) = selections_file.or_else(|| config.selections_file.clone()) {
        let snapshot = SelectionSnapshot::load_or_default(&path);
        snapshot.apply_to(&mut base_state);
        tracing::info!(
            path = %path.display(),
            selected = base_state.selected_count(),
            omit_unselected = base_state.omit_unselected(),
            "Restored selection snapshot"
        );
    }

    Ok(AppState {
        config,
        service,
        base_state: Arc::new(base_state),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/palette.png", get(handle_palette))
        .route("/api/hit", get(handle_hit))
        .route("/api/categories", get(api::handle_categories))
        .route("/api/categories/:id", get(api::handle_category))
        .route("/api/themes", get(api::handle_themes))
        .route("/api/colorblind-modes", get(api::handle_colorblind_modes))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Every response is a pure function of the query string
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            axum::http::HeaderValue::from_static("no-cache"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_palette(
    State(state): State<AppState>,
    query: Query<api::PaletteQuery>,
) -> Result<Response, ApiError> {
    api::handle_palette(
        State(state.service.clone()),
        State(state.base_state.clone()),
        State(state.config.render),
        query,
    )
    .await
}

async fn handle_hit(
    State(state): State<AppState>,
    query: Query<api::HitQuery>,
) -> Result<Json<api::HitResponse>, ApiError> {
    api::handle_hit(State(state.layout()), State(state.base_state), query).await
}
