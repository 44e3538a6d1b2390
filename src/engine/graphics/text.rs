//! Renders a single line of text to an RGBA image.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use log::info;

use crate::error::StartupError;

pub fn load_font(path: &Path) -> Result<FontVec, StartupError> {
    let bytes = std::fs::read(path).map_err(|source| StartupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let font = FontVec::try_from_vec(bytes).map_err(|source| StartupError::Font {
        path: path.to_path_buf(),
        source,
    })?;
    info!("[text] Loaded font from {}", path.display());
    Ok(font)
}

/// Lays `text` out on one line and blends it into a transparent image sized
/// to the line: the sum of advances wide, ascent minus descent tall.
pub fn render_line(
    font: &impl Font,
    text: &str,
    size: f32,
    color: [u8; 4],
) -> Result<RgbaImage, StartupError> {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);

    let mut glyphs: Vec<Glyph> = Vec::with_capacity(text.len());
    let mut caret = point(0.0, scaled.ascent());
    let mut previous = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret.x += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, caret));
        caret.x += scaled.h_advance(id);
        previous = Some(id);
    }

    let width = caret.x.ceil() as u32;
    let height = (scaled.ascent() - scaled.descent()).ceil() as u32;
    if width == 0 || height == 0 {
        return Err(StartupError::EmptyLabel(text.to_string()));
    }

    let [r, g, b, a] = color;
    let mut image = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 0]));
    for glyph in glyphs {
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|x, y, coverage| {
            let px = bounds.min.x as i32 + x as i32;
            let py = bounds.min.y as i32 + y as i32;
            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                return;
            }
            let pixel = image.get_pixel_mut(px as u32, py as u32);
            let alpha = (coverage.clamp(0.0, 1.0) * a as f32).round() as u8;
            // Overlapping glyph edges keep the stronger coverage.
            pixel.0[3] = pixel.0[3].max(alpha);
        });
    }
    Ok(image)
}
