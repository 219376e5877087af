pub mod palette_service;
pub mod render_cache;

pub use palette_service::PaletteService;
pub use render_cache::RenderCache;
