//! # PDF Module
//!
//! Writes rendered page canvases into a single multi-page PDF.
//!
//! Each canvas is JPEG-encoded and embedded full-bleed in a PDF page whose
//! physical size matches the canvas at a fixed DPI, so every page of the
//! document has identical dimensions.

use crate::error::PdfError;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use printpdf::image_crate::codecs::jpeg::JpegDecoder;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolution used to map canvas pixels onto page coordinates
const PAGE_DPI: f32 = 150.0;

/// JPEG quality for embedded page images
const PAGE_JPEG_QUALITY: u8 = 90;

/// Strip a file stem down to letters, then drop the spaces
///
/// `"Trip_Report #3 (final)"` becomes `"TripReportfinal"`.
pub fn clean_title(stem: &str) -> String {
    let re = Regex::new(r"[^A-Za-z ]+").unwrap();
    re.replace_all(stem, "").trim().replace(' ', "")
}

/// Derive the output path for an input archive
///
/// The report lands beside the archive as
/// `"Field Report - {CleanedName}.pdf"`.
pub fn report_file_name(zip_path: &Path) -> PathBuf {
    let stem = zip_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let cleaned = clean_title(stem);
    let dir = zip_path.parent().unwrap_or_else(|| Path::new("."));
    dir.join(format!("Field Report - {}.pdf", cleaned))
}

fn px_to_mm(px: u32) -> Mm {
    Mm(px as f32 * 25.4 / PAGE_DPI)
}

/// Write page canvases to `output` as a multi-page PDF
///
/// The first canvas becomes the primary page; the rest are appended in
/// order. All canvases must share the same dimensions.
pub fn write_pdf(pages: &[RgbImage], title: &str, output: &Path) -> Result<(), PdfError> {
    debug_assert!(!pages.is_empty());
    let Some(first) = pages.first() else {
        return Ok(());
    };

    let page_width = px_to_mm(first.width());
    let page_height = px_to_mm(first.height());

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, page_width, page_height, "Page 1");

    for (index, canvas) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(page_width, page_height, format!("Page {}", index + 1))
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        let mut jpeg_bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg_bytes, PAGE_JPEG_QUALITY)
            .encode_image(canvas)
            .map_err(|e| PdfError::PageEncodeFailed {
                page: index + 1,
                reason: e.to_string(),
            })?;

        let decoder = JpegDecoder::new(Cursor::new(jpeg_bytes)).map_err(|e| {
            PdfError::PageEncodeFailed {
                page: index + 1,
                reason: e.to_string(),
            }
        })?;
        let embedded = Image::try_from(decoder).map_err(|e| PdfError::PageEncodeFailed {
            page: index + 1,
            reason: e.to_string(),
        })?;

        embedded.add_to_layer(
            layer,
            ImageTransform {
                dpi: Some(PAGE_DPI),
                ..Default::default()
            },
        );
    }

    let file = File::create(output).map_err(|e| PdfError::WriteFailed {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| PdfError::WriteFailed {
            path: output.to_path_buf(),
            reason: e.to_string(),
        })?;

    debug!("wrote {} page(s) to {}", pages.len(), output.display());
    Ok(())
}
