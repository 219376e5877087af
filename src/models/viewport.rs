//! Display zoom for pointer interaction
//!
//! Hit-testing works in native surface pixels. A client showing the texture
//! at some zoom level divides pointer positions by the zoom before asking,
//! and scales the returned highlight back up for display.

use serde::{Deserialize, Serialize};
use swatch_engine::Highlight;
use utoipa::ToSchema;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
}

impl Viewport {
    /// Viewport at `zoom`, clamped to the supported range.
    /// Non-finite values reset to 1.
    pub fn new(zoom: f64) -> Self {
        let zoom = if zoom.is_finite() {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            1.0
        };
        Self { zoom }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zoom as a rounded percentage, e.g. 125
    pub fn percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Edge length of the texture on screen
    pub fn display_size(&self, canvas_size: u32) -> f64 {
        canvas_size as f64 * self.zoom
    }

    /// Client coordinates to native surface pixels
    pub fn to_native(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.zoom, y / self.zoom)
    }

    /// Native highlight to client coordinates
    pub fn to_display(&self, highlight: &Highlight) -> DisplayHighlight {
        DisplayHighlight::from(highlight.scaled(self.zoom))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

/// Highlight rectangle in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DisplayHighlight {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Draw the label above the rectangle instead of below it
    pub label_above: bool,
}

impl From<Highlight> for DisplayHighlight {
    fn from(h: Highlight) -> Self {
        Self {
            left: h.left,
            top: h.top,
            width: h.width,
            height: h.height,
            label_above: h.label_above,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_is_clamped() {
        assert_eq!(Viewport::new(0.1).zoom(), MIN_ZOOM);
        assert_eq!(Viewport::new(20.0).zoom(), MAX_ZOOM);
        assert_eq!(Viewport::new(f64::NAN).zoom(), 1.0);
        assert_eq!(Viewport::new(2.5).zoom(), 2.5);
    }

    #[test]
    fn test_percent() {
        assert_eq!(Viewport::new(1.5).percent(), 150);
        assert_eq!(Viewport::new(0.333).percent(), 50);
        assert_eq!(Viewport::default().percent(), 100);
    }

    #[test]
    fn test_coordinate_round_trip() {
        let viewport = Viewport::new(2.0);
        assert_eq!(viewport.to_native(100.0, 64.0), (50.0, 32.0));
        assert_eq!(viewport.display_size(1024), 2048.0);

        let native = Highlight {
            left: 32.0,
            top: 32.0,
            width: 192.0,
            height: 192.0,
            label_above: false,
        };
        let shown = viewport.to_display(&native);
        assert_eq!((shown.left, shown.width), (64.0, 384.0));
        assert!(!shown.label_above);
    }
}
