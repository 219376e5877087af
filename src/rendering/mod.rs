pub mod encode;
pub mod overlay;
pub mod palette_renderer;

pub use palette_renderer::{PaletteRenderer, EXPORT_FILENAME};
