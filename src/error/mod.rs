//! # Error Module
//!
//! Error types for the contact sheet builder.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Metadata is different** - a missing capture date is not an error and
//!   never appears here; it collapses to `None` at the extraction boundary

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum ContactSheetError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("PDF output error: {0}")]
    Pdf(#[from] PdfError),
}

/// Errors that occur during photo scanning
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while unpacking the input zip archive
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Not a zip archive: {path}")]
    NotAZipFile { path: PathBuf },

    #[error("Archive not found: {path}")]
    ArchiveNotFound { path: PathBuf },

    #[error("Failed to open archive {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to unpack archive {path}: {reason}")]
    UnpackFailed { path: PathBuf, reason: String },

    #[error("Failed to create extraction directory: {source}")]
    TempDir {
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while decoding or rendering a single photo
///
/// These are caught per file: the photo is skipped with a warning and the
/// batch continues.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to decode image {path}: {reason}")]
    DecodeError { path: PathBuf, reason: String },

    #[error("Image is empty or corrupted: {path}")]
    EmptyImage { path: PathBuf },

    #[error("Failed to resize image {path}: {reason}")]
    ResizeFailed { path: PathBuf, reason: String },

    #[error("Failed to open image file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while writing the output PDF
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to encode page {page}: {reason}")]
    PageEncodeFailed { page: usize, reason: String },

    #[error("Failed to write PDF {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ContactSheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_includes_path() {
        let error = ScanError::DirectoryNotFound {
            path: PathBuf::from("/photos/vacation"),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/vacation"));
    }

    #[test]
    fn render_error_includes_path_and_reason() {
        let error = RenderError::DecodeError {
            path: PathBuf::from("/photos/broken.jpg"),
            reason: "invalid JPEG".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/broken.jpg"));
        assert!(message.contains("invalid JPEG"));
    }

    #[test]
    fn archive_error_names_the_offending_file() {
        let error = ArchiveError::NotAZipFile {
            path: PathBuf::from("/reports/notes.txt"),
        };
        assert!(error.to_string().contains("notes.txt"));
    }
}
