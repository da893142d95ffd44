//! # Core Module
//!
//! The UI-agnostic contact sheet engine.
//!
//! ## Modules
//! - `scanner` - discovers image files in a folder
//! - `metadata` - extracts capture dates from embedded EXIF
//! - `sorter` - orders records chronologically, undated last
//! - `thumbnail` - decodes photos and renders padded thumbnails
//! - `sheet` - lays out labeled thumbnails on fixed grids
//! - `archive` - unpacks zip input into a scoped temp directory
//! - `pdf` - writes page canvases into a multi-page PDF
//! - `pipeline` - orchestrates the full workflow

pub mod archive;
pub mod metadata;
pub mod pdf;
pub mod pipeline;
pub mod scanner;
pub mod sheet;
pub mod sorter;
pub mod thumbnail;

// Re-export commonly used types
pub use metadata::{format_label, CaptureDate, DateReaderRegistry, NO_DATE_LABEL};
pub use pipeline::{ReportOutcome, ReportPipeline, ReportResult};
pub use scanner::ImageRecord;
pub use sheet::{SheetCell, SheetLayout};
