//! # Photo Contact Sheet
//!
//! Builds dated, paginated contact-sheet PDFs from folders or zip archives
//! of photos.
//!
//! ## Core Philosophy
//! - **Best-effort dates** - missing or corrupt EXIF is never an error
//! - **Skip and continue** - one broken photo never aborts the batch
//! - **Uniform grids** - every page keeps exactly `cols * rows` cells
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and thin binaries:
//! - `core` - scanning, metadata, thumbnailing, layout, PDF assembly
//! - `error` - per-subsystem error types
//! - binaries - `field-report` (sheet builder) and `photo-dates` (extractor)

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{ContactSheetError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
