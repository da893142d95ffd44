//! # Metadata Module
//!
//! Extracts capture dates from embedded EXIF metadata.
//!
//! ## Contract
//! `capture_date` is a best-effort lookup: every internal failure (missing
//! file, unreadable container, absent field, malformed date string)
//! collapses to `None`. Nothing in this module returns an error.
//!
//! ## Readers
//! Formats are looked up in an explicit [`DateReaderRegistry`] built once at
//! startup; formats without a registered reader (PNG) always report `None`.

use crate::core::scanner::ImageFormat;
use chrono::{DateTime, NaiveDateTime, Utc};
use exif::{Exif, In, Reader, Tag, Value};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Best-effort capture timestamp of a photo
pub type CaptureDate = DateTime<Utc>;

/// EXIF "DateTimeOriginal" wire format
pub const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Format used for thumbnail labels
pub const LABEL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Label placeholder for photos without a capture date
pub const NO_DATE_LABEL: &str = "No date";

/// A format-specific capture date reader
pub type DateReader = fn(&Path) -> Option<CaptureDate>;

/// Capability table mapping image formats to their date readers
///
/// Built explicitly at process start and passed to the scanner; there is no
/// ambient global registration.
pub struct DateReaderRegistry {
    readers: HashMap<ImageFormat, DateReader>,
}

impl DateReaderRegistry {
    /// Create a registry with the built-in JPEG and HEIC readers
    pub fn with_defaults() -> Self {
        let mut readers: HashMap<ImageFormat, DateReader> = HashMap::new();
        readers.insert(ImageFormat::Jpeg, read_jpeg_date);
        readers.insert(ImageFormat::Heic, read_heif_date);
        Self { readers }
    }

    /// Look up the capture date for a file, if its format has a reader
    pub fn capture_date(&self, path: &Path, format: ImageFormat) -> Option<CaptureDate> {
        self.readers.get(&format).and_then(|reader| reader(path))
    }
}

impl Default for DateReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Read DateTimeOriginal from a JPEG file's EXIF segment
fn read_jpeg_date(path: &Path) -> Option<CaptureDate> {
    let file = File::open(path).ok()?;
    let mut bufreader = BufReader::new(&file);
    let exif = Reader::new().read_from_container(&mut bufreader).ok()?;
    datetime_original(&exif)
}

/// Read DateTimeOriginal from the EXIF blob embedded in a HEIF container
fn read_heif_date(path: &Path) -> Option<CaptureDate> {
    // HEIF stores the EXIF payload as an item inside the container, so the
    // whole file is pulled into memory before handing it to the parser.
    let bytes = fs::read(path).ok()?;
    let mut cursor = Cursor::new(bytes);
    let exif = Reader::new().read_from_container(&mut cursor).ok()?;
    datetime_original(&exif)
}

/// Decode the DateTimeOriginal field from parsed EXIF data
fn datetime_original(exif: &Exif) -> Option<CaptureDate> {
    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    let vec = match field.value {
        Value::Ascii(ref vec) => vec,
        _ => return None,
    };
    let bytes = vec.first()?;
    let s = std::str::from_utf8(bytes).ok()?;
    // EXIF date format: "YYYY:MM:DD HH:MM:SS"
    let naive = NaiveDateTime::parse_from_str(s.trim_end_matches('\0').trim(), EXIF_DATE_FORMAT)
        .ok()?;
    Some(DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Format a capture date for a thumbnail label
pub fn format_label(date: Option<CaptureDate>) -> String {
    match date {
        Some(date) => date.format(LABEL_DATE_FORMAT).to_string(),
        None => NO_DATE_LABEL.to_string(),
    }
}
