pub mod config;
pub mod selections;
pub mod viewport;

pub use config::{AppConfig, DefaultsConfig, LayoutConfig, RenderOptions};
pub use selections::SelectionSnapshot;
pub use viewport::{DisplayHighlight, Viewport};
