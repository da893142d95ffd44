//! # Scanner Module
//!
//! Discovers image files in a folder and attaches their capture dates.
//!
//! ## Supported Formats
//! - JPEG (.jpg, .jpeg)
//! - PNG (.png)
//! - HEIC (.heic, .heif) - iPhone photos
//!
//! PNG files are listed but never inspected for a date; only formats with a
//! registered date reader can produce one.
//!
//! ## Example
//! ```rust,ignore
//! use photo_contact_sheet::core::metadata::DateReaderRegistry;
//! use photo_contact_sheet::core::scanner::{FolderScanner, ScanConfig};
//!
//! let registry = DateReaderRegistry::with_defaults();
//! let scanner = FolderScanner::new(ScanConfig::default());
//! let records = scanner.scan(Path::new("/photos"), &registry)?;
//! ```

mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::{FolderScanner, ScanConfig};

use crate::core::metadata::CaptureDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A discovered image file with its best-effort capture date
///
/// Records are created during the folder scan and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    /// File name without the directory part
    pub filename: String,
    /// Full path to the image file
    pub path: PathBuf,
    /// Detected image format
    pub format: ImageFormat,
    /// Capture date from embedded EXIF, if one could be extracted
    pub capture_date: Option<CaptureDate>,
}

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Heic,
    Unknown,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            "png" => ImageFormat::Png,
            "heic" | "heif" => ImageFormat::Heic,
            _ => ImageFormat::Unknown,
        }
    }

    /// Check if this format is supported
    pub fn is_supported(&self) -> bool {
        !matches!(self, ImageFormat::Unknown)
    }
}
