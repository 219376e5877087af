use crate::error::RenderError;
use crate::models::RenderOptions;
use crate::rendering::{encode, overlay};
use resvg::usvg::{self, Transform};
use std::sync::Arc;
use swatch_engine::{Frame, LayoutEngine, PaletteState, Surface};
use tiny_skia::Pixmap;

/// Default file name for exported textures
pub const EXPORT_FILENAME: &str = "lowpoly-palette.png";

/// Renders palette states to decorated PNG textures.
///
/// The swatches come from the engine's [`Surface`]; borders, labels and the
/// debug grid are layered on top according to [`RenderOptions`].
pub struct PaletteRenderer {
    /// Font database for label text
    fontdb: Arc<fontdb::Database>,
}

impl PaletteRenderer {
    /// Create a new renderer with fonts loaded from the provided data
    pub fn with_fonts(fonts: Vec<(String, std::borrow::Cow<'static, [u8]>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data.into_owned());
            tracing::debug!(font = %name, "Loaded font");
        }

        // Load system fonts as fallback
        fontdb.load_system_fonts();

        tracing::info!(font_count = fontdb.len(), "Loaded fonts for label rendering");

        let families: std::collections::HashSet<_> = fontdb
            .faces()
            .filter_map(|f| f.families.first().map(|(name, _)| name.clone()))
            .collect();
        tracing::debug!(families = ?families, "Available font families");

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a new renderer with system fonts only
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Recompute `state` and draw it with the requested decorations
    pub fn render_pixmap(
        &self,
        state: &PaletteState,
        layout: &LayoutEngine,
        options: &RenderOptions,
    ) -> Result<Pixmap, RenderError> {
        let frame = Frame::compute(state, layout);
        let surface = Surface::render(&frame, layout);
        let mut pixmap = surface_to_pixmap(&surface)?;

        if options.borders {
            overlay::draw_borders(&mut pixmap, &frame);
        }
        if options.labels && !frame.is_empty() {
            self.draw_labels(&mut pixmap, &frame, layout.params().canvas_size)?;
        }
        if options.grid {
            overlay::draw_grid(&mut pixmap, state.catalog(), layout);
        }

        tracing::debug!(
            regions = frame.len(),
            selected = state.selected_count(),
            theme = state.theme().id,
            "Rendered palette"
        );
        Ok(pixmap)
    }

    /// Render `state` to PNG bytes
    pub fn render_png(
        &self,
        state: &PaletteState,
        layout: &LayoutEngine,
        options: &RenderOptions,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.render_pixmap(state, layout, options)?;
        let rgb = encode::pixmap_to_rgb(&pixmap);
        encode::encode_rgb(pixmap.width(), pixmap.height(), &rgb, options.optimize)
    }

    /// Rasterize the label overlay onto the pixmap
    fn draw_labels(
        &self,
        pixmap: &mut Pixmap,
        frame: &Frame,
        canvas_size: u32,
    ) -> Result<(), RenderError> {
        let svg = overlay::label_svg(frame, canvas_size);
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
        Ok(())
    }
}

impl Default for PaletteRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy an RGB surface into an opaque pixmap
fn surface_to_pixmap(surface: &Surface) -> Result<Pixmap, RenderError> {
    let mut pixmap =
        Pixmap::new(surface.width(), surface.height()).ok_or(RenderError::PixmapAllocation)?;
    for (dst, src) in pixmap
        .data_mut()
        .chunks_exact_mut(4)
        .zip(surface.as_bytes().chunks_exact(3))
    {
        dst[..3].copy_from_slice(src);
        dst[3] = 255;
    }
    Ok(pixmap)
}
