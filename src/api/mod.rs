pub mod catalog;
pub mod hit;
pub mod palette;
pub mod query;

pub use catalog::{
    handle_categories, handle_category, handle_colorblind_modes, handle_themes, CategoryInfo,
    ColorblindModeInfo, OverrideInfo, ThemeInfo,
};
pub use catalog::{
    __path_handle_categories, __path_handle_category, __path_handle_colorblind_modes,
    __path_handle_themes,
};
pub use hit::{handle_hit, HitQuery, HitResponse, __path_handle_hit};
pub use palette::{handle_palette, PaletteQuery, __path_handle_palette};
pub use query::SelectionParams;
