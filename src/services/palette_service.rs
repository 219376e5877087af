use axum::body::Bytes;
use std::sync::Arc;
use swatch_engine::{LayoutEngine, PaletteState};

use crate::error::RenderError;
use crate::models::RenderOptions;
use crate::rendering::PaletteRenderer;
use crate::services::RenderCache;

/// High-level render service: cache lookup plus off-runtime rendering
pub struct PaletteService {
    renderer: Arc<PaletteRenderer>,
    layout: LayoutEngine,
    cache: RenderCache,
}

impl PaletteService {
    pub fn new(renderer: Arc<PaletteRenderer>, layout: LayoutEngine) -> Self {
        Self {
            renderer,
            layout,
            cache: RenderCache::new(),
        }
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    /// Cache key for a state and set of decorations
    pub fn cache_key(state: &PaletteState, options: &RenderOptions) -> String {
        format!(
            "{};labels={};borders={};grid={};optimize={}",
            state.fingerprint(),
            options.labels,
            options.borders,
            options.grid,
            options.optimize
        )
    }

    /// Render `state` to PNG, reusing a cached texture when one exists
    ///
    /// Uses spawn_blocking to keep recomputation and PNG compression off
    /// the async runtime.
    pub async fn render_png(
        &self,
        state: PaletteState,
        options: RenderOptions,
    ) -> Result<Bytes, RenderError> {
        let key = Self::cache_key(&state, &options);
        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(key = %key, "Serving cached texture");
            return Ok(cached);
        }

        let png = self.render_in_blocking_context(state, options).await?;
        let png = Bytes::from(png);
        self.cache.store(&key, png.clone()).await;
        tracing::info!(key = %key, bytes = png.len(), "Rendered texture");
        Ok(png)
    }

    /// Execute CPU-intensive rendering in a blocking context
    async fn render_in_blocking_context(
        &self,
        state: PaletteState,
        options: RenderOptions,
    ) -> Result<Vec<u8>, RenderError> {
        let renderer = self.renderer.clone();
        let layout = self.layout;

        tokio::task::spawn_blocking(move || renderer.render_png(&state, &layout, &options))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PaletteService {
        PaletteService::new(
            Arc::new(PaletteRenderer::with_fonts(Vec::new())),
            LayoutEngine::default(),
        )
    }

    #[test]
    fn test_cache_key_covers_options() {
        let state = PaletteState::default();
        let options = RenderOptions::default();
        let with_grid = RenderOptions {
            grid: true,
            ..options
        };
        assert_ne!(
            PaletteService::cache_key(&state, &options),
            PaletteService::cache_key(&state, &with_grid)
        );
    }

    #[tokio::test]
    async fn test_render_is_cached() {
        let service = service();
        let mut state = PaletteState::default();
        state.select("gems");
        let options = RenderOptions {
            optimize: false,
            ..RenderOptions::default()
        };

        let first = service.render_png(state.clone(), options).await.unwrap();
        assert_eq!(service.cache().len().await, 1);
        let second = service.render_png(state, options).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(service.cache().len().await, 1);
    }
}
