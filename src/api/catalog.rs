use axum::{extract::Path, Json};
use serde::Serialize;
use swatch_engine::{Catalog, Category, ColorblindMode, PartialAdjustment, Theme};
use utoipa::ToSchema;

use crate::error::ApiError;

/// A material category as served over the API
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Tile count along x and y
    pub tiles: [u32; 2],
    /// Tile-grid position of the top-left tile
    pub position: [u32; 2],
    /// Hue range in degrees, `[lo, hi]`
    pub hue: [f64; 2],
    pub saturation: [f64; 2],
    pub lightness: [f64; 2],
    /// Representative colour as `#rrggbb`
    pub swatch: String,
}

impl From<&Category> for CategoryInfo {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.to_string(),
            description: c.description.to_string(),
            tiles: [c.tiles.width, c.tiles.height],
            position: [c.position.x, c.position.y],
            hue: [c.colors.hue.lo, c.colors.hue.hi],
            saturation: [c.colors.saturation.lo, c.colors.saturation.hi],
            lightness: [c.colors.lightness.lo, c.colors.lightness.hi],
            swatch: c.swatch_color().to_hex(),
        }
    }
}

/// Per-category theme override; absent fields keep the neutral value
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OverrideInfo {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_shift: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightness_shift: Option<f64>,
}

impl OverrideInfo {
    fn new(category: &str, adjustment: &PartialAdjustment) -> Self {
        Self {
            category: category.to_string(),
            hue_shift: adjustment.hue_shift,
            saturation_multiplier: adjustment.saturation_multiplier,
            lightness_shift: adjustment.lightness_shift,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ThemeInfo {
    pub id: String,
    pub name: String,
    pub hue_shift: f64,
    pub saturation_multiplier: f64,
    pub lightness_shift: f64,
    pub overrides: Vec<OverrideInfo>,
}

impl From<&Theme> for ThemeInfo {
    fn from(t: &Theme) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.to_string(),
            hue_shift: t.hue_shift,
            saturation_multiplier: t.saturation_multiplier,
            lightness_shift: t.lightness_shift,
            overrides: t
                .category_overrides
                .iter()
                .map(|(id, adj)| OverrideInfo::new(id, adj))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ColorblindModeInfo {
    pub id: String,
    pub label: String,
}

impl From<ColorblindMode> for ColorblindModeInfo {
    fn from(mode: ColorblindMode) -> Self {
        Self {
            id: mode.id().to_string(),
            label: mode.label().to_string(),
        }
    }
}

/// List all material categories in catalog order
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories", body = [CategoryInfo]),
    ),
    tag = "Catalog"
)]
pub async fn handle_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        Catalog::BUILTIN
            .categories()
            .iter()
            .map(CategoryInfo::from)
            .collect(),
    )
}

/// Look up a single category
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    responses(
        (status = 200, description = "Category found", body = CategoryInfo),
        (status = 404, description = "Unknown category id"),
    ),
    params(
        ("id" = String, Path, description = "Category id, e.g. 'wood'")
    ),
    tag = "Catalog"
)]
pub async fn handle_category(Path(id): Path<String>) -> Result<Json<CategoryInfo>, ApiError> {
    Catalog::BUILTIN
        .category(&id)
        .map(|c| Json(CategoryInfo::from(c)))
        .ok_or(ApiError::UnknownCategory(id))
}

/// List all themes, the neutral theme first
#[utoipa::path(
    get,
    path = "/api/themes",
    responses(
        (status = 200, description = "All themes", body = [ThemeInfo]),
    ),
    tag = "Catalog"
)]
pub async fn handle_themes() -> Json<Vec<ThemeInfo>> {
    Json(Catalog::BUILTIN.themes().iter().map(ThemeInfo::from).collect())
}

/// List the colorblind simulation modes
#[utoipa::path(
    get,
    path = "/api/colorblind-modes",
    responses(
        (status = 200, description = "All colorblind modes", body = [ColorblindModeInfo]),
    ),
    tag = "Catalog"
)]
pub async fn handle_colorblind_modes() -> Json<Vec<ColorblindModeInfo>> {
    Json(
        ColorblindMode::ALL
            .into_iter()
            .map(ColorblindModeInfo::from)
            .collect(),
    )
}
