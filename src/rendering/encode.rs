use crate::error::RenderError;
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Drop the alpha channel of an opaque pixmap
pub fn pixmap_to_rgb(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect()
}

/// Encode packed RGB8 data as a PNG.
///
/// With `optimize` the stream is written with fast settings and then
/// recompressed by oxipng; if oxipng fails the fast encoding is returned.
pub fn encode_rgb(
    width: u32,
    height: u32,
    rgb: &[u8],
    optimize: bool,
) -> Result<Vec<u8>, RenderError> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(RenderError::PngEncode(format!(
            "expected {expected} bytes of RGB data, got {}",
            rgb.len()
        )));
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        if optimize {
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, using fast encoding");
            Ok(png_bytes)
        }
    }
}
