//! Decorations drawn over the swatch surface
//!
//! Borders and the debug grid are stroked straight onto the pixmap with
//! tiny-skia. Labels go through a generated SVG document so that resvg can
//! shape the text with whatever fonts are loaded.

use std::fmt::Write;
use swatch_engine::{Catalog, Frame, LayoutEngine};
use tiny_skia::{Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Outline of a selected region
pub const SELECTED_BORDER: [u8; 4] = [74, 222, 128, 77];
/// Outline of a placeholder region
pub const UNSELECTED_BORDER: [u8; 4] = [255, 255, 255, 13];
/// Grid overlay: region outlines
pub const GRID_OUTLINE: [u8; 4] = [255, 255, 255, 38];
/// Grid overlay: fine lines
pub const GRID_LINE: [u8; 4] = [255, 255, 255, 13];
/// Fine grid spacing, in tiles
pub const GRID_STEP_TILES: u32 = 8;

const LABEL_FONT_FAMILY: &str = "Inter, sans-serif";
const LABEL_FONT_SIZE: u32 = 10;
/// Gap between a label's baseline and its region, in pixels
const LABEL_GAP: u32 = 4;
const SELECTED_LABEL: (&str, f32) = ("rgb(74,222,128)", 0.95);
const UNSELECTED_LABEL: (&str, f32) = ("rgb(255,255,255)", 0.4);

fn paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = false;
    paint
}

fn hairline() -> Stroke {
    Stroke {
        width: 1.0,
        ..Stroke::default()
    }
}

/// Stroke a one-pixel outline just inside the rectangle
fn stroke_inner_rect(
    pixmap: &mut Pixmap,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
    rgba: [u8; 4],
) {
    if width < 2 || height < 2 {
        return;
    }
    let Some(rect) = Rect::from_xywh(
        left as f32 + 0.5,
        top as f32 + 0.5,
        width as f32 - 1.0,
        height as f32 - 1.0,
    ) else {
        return;
    };
    let path = PathBuilder::from_rect(rect);
    pixmap.stroke_path(&path, &paint(rgba), &hairline(), Transform::identity(), None);
}

/// Outline every region, green for selected and faint white otherwise
pub fn draw_borders(pixmap: &mut Pixmap, frame: &Frame) {
    for region in frame.regions() {
        let color = if region.selected {
            SELECTED_BORDER
        } else {
            UNSELECTED_BORDER
        };
        let r = region.rect;
        stroke_inner_rect(pixmap, r.left, r.top, r.width, r.height, color);
    }
}

/// Debug grid: outlines of every catalog region, rendered or not, plus a
/// line every [`GRID_STEP_TILES`] tiles across the padded sheet.
pub fn draw_grid(pixmap: &mut Pixmap, catalog: &Catalog, layout: &LayoutEngine) {
    for category in catalog.categories() {
        let r = layout.region(category);
        stroke_inner_rect(pixmap, r.left, r.top, r.width, r.height, GRID_OUTLINE);
    }

    let params = layout.params();
    let padding = params.padding_px() as f32;
    let far = params.canvas_size.saturating_sub(params.padding_px()) as f32;
    let step = (GRID_STEP_TILES * params.tile_size).max(1) as usize;

    let mut builder = PathBuilder::new();
    for offset in (params.padding_px()..=params.canvas_size.saturating_sub(params.padding_px()))
        .step_by(step)
    {
        let at = offset as f32 + 0.5;
        builder.move_to(at, padding);
        builder.line_to(at, far);
        builder.move_to(padding, at);
        builder.line_to(far, at);
    }
    if let Some(path) = builder.finish() {
        pixmap.stroke_path(&path, &paint(GRID_LINE), &hairline(), Transform::identity(), None);
    }
}

/// Escape text for use inside an SVG element
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Transparent SVG document with one centred label above each region
pub fn label_svg(frame: &Frame, canvas_size: u32) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas_size}" height="{canvas_size}" viewBox="0 0 {canvas_size} {canvas_size}">"#
    );
    let _ = write!(
        svg,
        r#"<g font-family="{LABEL_FONT_FAMILY}" font-size="{LABEL_FONT_SIZE}" font-weight="bold" text-anchor="middle">"#
    );
    for region in frame.regions() {
        let (fill, opacity) = if region.selected {
            SELECTED_LABEL
        } else {
            UNSELECTED_LABEL
        };
        let x = region.rect.left as f32 + region.rect.width as f32 / 2.0;
        let y = region.rect.top as i64 - LABEL_GAP as i64;
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" fill="{fill}" fill-opacity="{opacity}">{}</text>"#,
            escape_xml(region.category.name)
        );
    }
    svg.push_str("</g></svg>");
    svg
}
