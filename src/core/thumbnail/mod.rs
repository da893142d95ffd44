//! # Thumbnail Module
//!
//! Renders photos into fixed-size, white-padded RGB thumbnails.
//!
//! The source image is flattened to RGB (alpha and palette images included),
//! scaled to fit the thumbnail box while preserving aspect ratio, and
//! centered on a white canvas. Thumbnails never crop.

mod decode;

pub use decode::ImageDecoder;

use crate::core::scanner::ImageFormat;
use crate::error::RenderError;
use fast_image_resize::{images::Image, PixelType, ResizeOptions, Resizer};
use image::{imageops, ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// Renders fixed-size padded thumbnails
///
/// The resizer is reused across files; SIMD-accelerated resizing is the
/// bulk of the per-photo work.
pub struct ThumbnailRenderer {
    width: u32,
    height: u32,
    resizer: Resizer,
}

impl ThumbnailRenderer {
    /// Create a renderer producing `width x height` thumbnails
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            resizer: Resizer::new(),
        }
    }

    /// Decode a photo and render its padded thumbnail
    pub fn render(&mut self, path: &Path, format: ImageFormat) -> Result<RgbImage, RenderError> {
        let decoded = ImageDecoder::decode(path, format)?;
        let rgb = decoded.to_rgb8();

        let src_width = rgb.width();
        let src_height = rgb.height();
        if src_width == 0 || src_height == 0 {
            return Err(RenderError::EmptyImage {
                path: path.to_path_buf(),
            });
        }

        // Scale to fit the box, up or down, preserving aspect ratio
        let scale = f64::min(
            self.width as f64 / src_width as f64,
            self.height as f64 / src_height as f64,
        );
        let scaled_width = ((src_width as f64 * scale).round() as u32)
            .clamp(1, self.width);
        let scaled_height = ((src_height as f64 * scale).round() as u32)
            .clamp(1, self.height);

        let scaled = self.resize_rgb(path, rgb, scaled_width, scaled_height)?;

        let mut canvas = RgbImage::from_pixel(self.width, self.height, Rgb([255, 255, 255]));
        let x = (self.width - scaled_width) / 2;
        let y = (self.height - scaled_height) / 2;
        imageops::replace(&mut canvas, &scaled, x as i64, y as i64);

        Ok(canvas)
    }

    fn resize_rgb(
        &mut self,
        path: &Path,
        rgb: RgbImage,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, RenderError> {
        let src_width = rgb.width();
        let src_height = rgb.height();

        let src_image = Image::from_vec_u8(src_width, src_height, rgb.into_raw(), PixelType::U8x3)
            .map_err(|e| RenderError::ResizeFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to create source image: {}", e),
            })?;

        let mut dst_image = Image::new(width, height, PixelType::U8x3);

        let options = ResizeOptions::new().resize_alg(fast_image_resize::ResizeAlg::Convolution(
            fast_image_resize::FilterType::Bilinear,
        ));

        self.resizer
            .resize(&src_image, &mut dst_image, &options)
            .map_err(|e| RenderError::ResizeFailed {
                path: path.to_path_buf(),
                reason: format!("Resize failed: {}", e),
            })?;

        let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_raw(width, height, dst_image.into_vec()).ok_or_else(|| {
                RenderError::ResizeFailed {
                    path: path.to_path_buf(),
                    reason: "Failed to create result buffer".to_string(),
                }
            })?;

        Ok(buffer)
    }
}
