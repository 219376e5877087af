//! Raster surface
//!
//! A packed RGB8 pixel buffer, always produced whole from a [`Frame`].

use crate::color::Rgb8;
use crate::frame::Frame;
use crate::layout::LayoutEngine;

/// Canvas background.
pub const BACKGROUND: Rgb8 = Rgb8::grey(10);

/// Square RGB8 canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Canvas of the given size filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Self {
        let data = color
            .to_bytes()
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Draw every region of `frame` onto a fresh background.
    ///
    /// Tile cells that would fall outside the canvas are clipped.
    pub fn render(frame: &Frame, layout: &LayoutEngine) -> Self {
        let size = layout.params().canvas_size;
        let mut surface = Self::filled(size, size, BACKGROUND);
        for region in frame.regions() {
            for (x, y, color) in region.colors.tiles() {
                let cell = layout.tile_rect(region.category, x, y);
                surface.fill_rect(cell.left, cell.top, cell.width, cell.height, color);
            }
        }
        surface
    }

    fn fill_rect(&mut self, left: u32, top: u32, width: u32, height: u32, color: Rgb8) {
        let right = left.saturating_add(width).min(self.width);
        let bottom = top.saturating_add(height).min(self.height);
        if left >= right || top >= bottom {
            return;
        }
        let bytes = color.to_bytes();
        for y in top..bottom {
            let start = (y as usize * self.width as usize + left as usize) * 3;
            let end = (y as usize * self.width as usize + right as usize) * 3;
            for pixel in self.data[start..end].chunks_exact_mut(3) {
                pixel.copy_from_slice(&bytes);
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at (`x`, `y`), or None outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Packed RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
