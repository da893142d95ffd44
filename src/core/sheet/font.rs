//! Label font loading and glyph drawing.
//!
//! Tries a preferred TrueType file, then a fixed list of common system
//! fonts; when none parses, labels degrade to the built-in 8x8 bitmap
//! glyphs. The fallback chain is deterministic and leaves no partial state.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Common system font locations tried in order
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Pixel height of the bitmap fallback glyphs
const BITMAP_GLYPH_SIZE: u32 = 8;

/// Font used for thumbnail labels
pub enum LabelFont {
    /// A scalable TrueType font
    Scalable(Font<'static>),
    /// Built-in 8x8 bitmap glyphs, always available
    Bitmap,
}

impl LabelFont {
    /// Load a label font, preferring `preferred` when given
    ///
    /// Never fails: when neither the preferred file nor any system
    /// candidate parses, the bitmap fallback is returned.
    pub fn load(preferred: Option<&Path>) -> Self {
        if let Some(path) = preferred {
            if let Some(font) = Self::try_load_file(path) {
                debug!("loaded label font: {}", path.display());
                return LabelFont::Scalable(font);
            }
            debug!("preferred font unusable: {}", path.display());
        }

        for candidate in FONT_CANDIDATES {
            let path = Path::new(candidate);
            if let Some(font) = Self::try_load_file(path) {
                debug!("loaded label font: {}", candidate);
                return LabelFont::Scalable(font);
            }
        }

        debug!("no scalable font available, using bitmap glyphs");
        LabelFont::Bitmap
    }

    fn try_load_file(path: &Path) -> Option<Font<'static>> {
        let bytes = fs::read(path).ok()?;
        Font::try_from_vec(bytes)
    }

    /// Measure the rendered width of `text` in pixels
    pub fn text_width(&self, text: &str, size: f32) -> u32 {
        match self {
            LabelFont::Scalable(font) => {
                let scale = Scale::uniform(size);
                font.layout(text, scale, point(0.0, 0.0))
                    .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                    .fold(0.0f32, f32::max)
                    .ceil() as u32
            }
            LabelFont::Bitmap => text.chars().count() as u32 * BITMAP_GLYPH_SIZE,
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`
    ///
    /// Glyphs falling outside the canvas are clipped.
    pub fn draw(&self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, size: f32, color: Rgb<u8>) {
        match self {
            LabelFont::Scalable(font) => Self::draw_scalable(canvas, font, text, x, y, size, color),
            LabelFont::Bitmap => Self::draw_bitmap(canvas, text, x, y, color),
        }
    }

    fn draw_scalable(
        canvas: &mut RgbImage,
        font: &Font,
        text: &str,
        x: i32,
        y: i32,
        size: f32,
        color: Rgb<u8>,
    ) {
        let scale = Scale::uniform(size);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<_> = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .collect();

        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let px = x + gx as i32 + bb.min.x;
                    let py = y + gy as i32 + bb.min.y;

                    if px < 0 || py < 0 || px >= canvas.width() as i32 || py >= canvas.height() as i32
                    {
                        return;
                    }

                    let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                    for idx in 0..3 {
                        let blended =
                            color[idx] as f32 * coverage + pixel[idx] as f32 * (1.0 - coverage);
                        pixel[idx] = blended.round().clamp(0.0, 255.0) as u8;
                    }
                });
            }
        }
    }

    fn draw_bitmap(canvas: &mut RgbImage, text: &str, x: i32, y: i32, color: Rgb<u8>) {
        for (index, ch) in text.chars().enumerate() {
            let glyph = match BASIC_FONTS.get(ch) {
                Some(glyph) => glyph,
                None => continue,
            };

            let glyph_x = x + (index as u32 * BITMAP_GLYPH_SIZE) as i32;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..BITMAP_GLYPH_SIZE {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let px = glyph_x + col as i32;
                    let py = y + row as i32;
                    if px < 0 || py < 0 || px >= canvas.width() as i32 || py >= canvas.height() as i32
                    {
                        continue;
                    }
                    canvas.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_width_is_eight_pixels_per_char() {
        let font = LabelFont::Bitmap;
        assert_eq!(font.text_width("No date", 14.0), 7 * 8);
        assert_eq!(font.text_width("", 14.0), 0);
    }

    #[test]
    fn bitmap_draw_marks_pixels() {
        let font = LabelFont::Bitmap;
        let mut canvas = RgbImage::from_pixel(40, 12, Rgb([255, 255, 255]));

        font.draw(&mut canvas, "2023", 0, 0, 14.0, Rgb([0, 0, 0]));

        let touched = canvas.pixels().any(|p| *p != Rgb([255, 255, 255]));
        assert!(touched);
    }

    #[test]
    fn draw_clips_outside_canvas() {
        let font = LabelFont::Bitmap;
        let mut canvas = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));

        // Far off-canvas positions must not panic
        font.draw(&mut canvas, "No date", -50, -50, 14.0, Rgb([0, 0, 0]));
        font.draw(&mut canvas, "No date", 100, 100, 14.0, Rgb([0, 0, 0]));
    }

    #[test]
    fn load_with_bad_preferred_path_still_returns_a_font() {
        // Either a system font or the bitmap fallback; never a panic
        let font = LabelFont::load(Some(Path::new("/nonexistent/font.ttf")));
        assert!(font.text_width("No date", 14.0) > 0);
    }
}
