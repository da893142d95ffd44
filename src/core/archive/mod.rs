//! # Archive Module
//!
//! Unpacks the input zip archive into a scoped temporary directory.
//!
//! The extraction directory lives exactly as long as the
//! [`ExtractedArchive`] value: it is removed on drop on every exit path,
//! including early returns and panics during page rendering.

use crate::error::ArchiveError;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;
use tracing::debug;
use zip::ZipArchive;

/// A zip archive unpacked into a scoped temp directory
pub struct ExtractedArchive {
    dir: TempDir,
}

impl ExtractedArchive {
    /// Validate that a path looks like an existing zip archive
    ///
    /// The path must end in `.zip` (case-insensitive) and exist as a
    /// regular file.
    pub fn validate(path: &Path) -> Result<(), ArchiveError> {
        let is_zip = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("zip"))
            .unwrap_or(false);
        if !is_zip {
            return Err(ArchiveError::NotAZipFile {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ArchiveError::ArchiveNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Extract the archive fully into a fresh temp directory
    pub fn unpack(path: &Path) -> Result<Self, ArchiveError> {
        Self::validate(path)?;

        let file = File::open(path).map_err(|e| ArchiveError::OpenFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut archive = ZipArchive::new(file).map_err(|e| ArchiveError::UnpackFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let dir = TempDir::new().map_err(|e| ArchiveError::TempDir { source: e })?;

        archive
            .extract(dir.path())
            .map_err(|e| ArchiveError::UnpackFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(
            "extracted {} entries to {}",
            archive.len(),
            dir.path().display()
        );

        Ok(Self { dir })
    }

    /// Path of the extraction directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_zip(dir: &TempDir, name: &str, entries: &[(&str, &[u8])]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let file = File::create(&path).unwrap();
        let mut writer = ZipWriter::new(file);
        for (entry_name, bytes) in entries {
            writer
                .start_file(*entry_name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn validate_rejects_non_zip_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photos.tar");
        std::fs::write(&path, b"x").unwrap();

        assert!(matches!(
            ExtractedArchive::validate(&path),
            Err(ArchiveError::NotAZipFile { .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.zip");

        assert!(matches!(
            ExtractedArchive::validate(&path),
            Err(ArchiveError::ArchiveNotFound { .. })
        ));
    }

    #[test]
    fn validate_accepts_uppercase_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(&dir, "PHOTOS.ZIP", &[("a.txt", b"hello")]);

        assert!(ExtractedArchive::validate(&path).is_ok());
    }

    #[test]
    fn unpack_extracts_entries() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(
            &dir,
            "photos.zip",
            &[("a.txt", b"hello"), ("nested/b.txt", b"world")],
        );

        let extracted = ExtractedArchive::unpack(&path).unwrap();

        assert!(extracted.path().join("a.txt").is_file());
        assert!(extracted.path().join("nested/b.txt").is_file());
    }

    #[test]
    fn extraction_directory_is_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(&dir, "photos.zip", &[("a.txt", b"hello")]);

        let extraction_path = {
            let extracted = ExtractedArchive::unpack(&path).unwrap();
            extracted.path().to_path_buf()
        };

        assert!(!extraction_path.exists());
    }

    #[test]
    fn unpack_corrupt_zip_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.zip");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        assert!(matches!(
            ExtractedArchive::unpack(&path),
            Err(ArchiveError::UnpackFailed { .. })
        ));
    }
}
