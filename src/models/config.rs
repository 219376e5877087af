use crate::assets::AssetLoader;
use crate::error::RenderError;
use serde::Deserialize;
use std::path::PathBuf;
use swatch_engine::{ColorblindMode, LayoutParams, PaletteState, OVERFLOW_ROW};

/// Largest canvas edge we agree to render, in pixels
pub const MAX_CANVAS_SIZE: u32 = 4096;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Output geometry
    pub layout: LayoutConfig,

    /// Decorations and encoding
    pub render: RenderOptions,

    /// Initial palette state
    pub defaults: DefaultsConfig,

    /// Selection snapshot restored at startup
    pub selections_file: Option<PathBuf>,
}

/// Geometry of the generated texture
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    pub tile_size: u32,
    pub padding_tiles: u32,
    pub label_height: u32,
    pub canvas_size: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            tile_size: params.tile_size,
            padding_tiles: params.padding_tiles,
            label_height: params.label_height,
            canvas_size: params.canvas_size,
        }
    }
}

impl LayoutConfig {
    pub fn params(&self) -> LayoutParams {
        LayoutParams {
            tile_size: self.tile_size,
            padding_tiles: self.padding_tiles,
            label_height: self.label_height,
            canvas_size: self.canvas_size,
        }
    }

    /// Reject geometry that cannot be rendered
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.canvas_size == 0 || self.canvas_size > MAX_CANVAS_SIZE {
            return Err(RenderError::UnsupportedSize(self.canvas_size));
        }
        if self.tile_size == 0 || self.tile_size > self.canvas_size {
            return Err(RenderError::UnsupportedSize(self.tile_size));
        }

        let canvas = u64::from(self.canvas_size);
        let padding = u64::from(self.padding_tiles) * u64::from(self.tile_size);
        if padding * 2 >= canvas {
            return Err(RenderError::InvalidLayout(format!(
                "padding of {padding}px leaves no room on a {canvas}px canvas"
            )));
        }
        let label_rows = u64::from(self.label_height) * u64::from(OVERFLOW_ROW);
        if padding + label_rows >= canvas {
            return Err(RenderError::InvalidLayout(format!(
                "label height {}px pushes rows off a {canvas}px canvas",
                self.label_height
            )));
        }
        Ok(())
    }
}

/// Decorations drawn over the swatches, and PNG encoding
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Category names above each region
    pub labels: bool,
    /// Thin outline around each region
    pub borders: bool,
    /// Debug overlay of region outlines and 8-tile grid lines
    pub grid: bool,
    /// Recompress the PNG with oxipng
    pub optimize: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            labels: true,
            borders: true,
            grid: false,
            optimize: true,
        }
    }
}

/// Palette settings applied before any selection or request overrides
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    pub theme: String,
    pub colorblind: String,
    pub warmth: i32,
    pub omit_unselected: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            theme: "none".to_string(),
            colorblind: "none".to_string(),
            warmth: 0,
            omit_unselected: false,
        }
    }
}

impl DefaultsConfig {
    /// Apply to `state`. Unknown theme and colorblind ids fall back to none.
    pub fn apply(&self, state: &mut PaletteState) {
        state.set_theme(&self.theme);
        state.set_colorblind_mode(ColorblindMode::from_id(&self.colorblind));
        state.set_warmth(self.warmth);
        state.set_omit_unselected(self.omit_unselected);
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML content, falling back to defaults on any error
    pub fn parse(content: &str) -> Self {
        match serde_yaml::from_str::<Option<Self>>(content) {
            Ok(config) => {
                let mut config = config.unwrap_or_default();
                if let Err(e) = config.layout.validate() {
                    tracing::warn!(%e, "Invalid layout in config, using default layout");
                    config.layout = LayoutConfig::default();
                }
                tracing::info!(
                    canvas = config.layout.canvas_size,
                    theme = %config.defaults.theme,
                    selections_file = ?config.selections_file,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Fresh palette state with the configured defaults applied
    pub fn base_state(&self) -> PaletteState {
        let mut state = PaletteState::default();
        self.defaults.apply(&mut state);
        state
    }
}
