//! Directory walking implementation using walkdir.

use super::{filter::ImageFilter, ImageRecord};
use crate::core::metadata::DateReaderRegistry;
use crate::error::ScanError;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Configuration for the directory scanner
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// Whether to include hidden files and directories
    pub include_hidden: bool,
    /// Maximum directory depth (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            include_hidden: false,
            max_depth: None,
        }
    }
}

/// Recursive folder scanner producing [`ImageRecord`]s
///
/// Entries are visited in lexicographic file-name order, so the scan order
/// (and with it the tie-break for undated files) is stable across runs.
pub struct FolderScanner {
    config: ScanConfig,
    filter: ImageFilter,
}

impl FolderScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let filter = ImageFilter::new().with_hidden(config.include_hidden);
        Self { config, filter }
    }

    /// Scan a folder and return one record per discovered image file
    ///
    /// The capture date is looked up through `registry` while the record is
    /// created; records are immutable afterwards.
    pub fn scan(
        &self,
        root: &Path,
        registry: &DateReaderRegistry,
    ) -> Result<Vec<ImageRecord>, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut records = Vec::new();

        let mut walker = WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry_result in walker {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();

            if path.is_dir() {
                // Skip hidden directories unless configured otherwise
                if !self.config.include_hidden {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        if name.starts_with('.') && path != root {
                            continue;
                        }
                    }
                }
                continue;
            }

            if !self.filter.should_include(path) {
                continue;
            }

            let format = self.filter.get_format(path);
            let capture_date = registry.capture_date(path, format);

            records.push(ImageRecord {
                filename: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: path.to_path_buf(),
                format,
                capture_date,
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::super::ImageFormat;
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn registry() -> DateReaderRegistry {
        DateReaderRegistry::with_defaults()
    }

    fn create_test_photo(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        // Write minimal JPEG header
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        path
    }

    #[test]
    fn scan_empty_directory_returns_empty_vec() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = FolderScanner::new(ScanConfig::default());

        let records = scanner.scan(temp_dir.path(), &registry()).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn scan_finds_single_photo() {
        let temp_dir = TempDir::new().unwrap();
        create_test_photo(&temp_dir, "photo.jpg");

        let scanner = FolderScanner::new(ScanConfig::default());
        let records = scanner.scan(temp_dir.path(), &registry()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "photo.jpg");
        assert_eq!(records[0].format, ImageFormat::Jpeg);
    }

    #[test]
    fn scan_detects_multiple_formats() {
        let temp_dir = TempDir::new().unwrap();
        create_test_photo(&temp_dir, "photo.jpg");
        create_test_photo(&temp_dir, "photo.png");
        create_test_photo(&temp_dir, "photo.heic");

        let scanner = FolderScanner::new(ScanConfig::default());
        let records = scanner.scan(temp_dir.path(), &registry()).unwrap();

        assert_eq!(records.len(), 3);

        let formats: Vec<_> = records.iter().map(|r| r.format).collect();
        assert!(formats.contains(&ImageFormat::Jpeg));
        assert!(formats.contains(&ImageFormat::Png));
        assert!(formats.contains(&ImageFormat::Heic));
    }

    #[test]
    fn scan_excludes_non_image_files() {
        let temp_dir = TempDir::new().unwrap();
        create_test_photo(&temp_dir, "photo.jpg");
        File::create(temp_dir.path().join("document.txt")).unwrap();
        File::create(temp_dir.path().join("report.pdf")).unwrap();

        let scanner = FolderScanner::new(ScanConfig::default());
        let records = scanner.scan(temp_dir.path(), &registry()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "photo.jpg");
    }

    #[test]
    fn scan_traverses_nested_directories() {
        let temp_dir = TempDir::new().unwrap();

        let subdir = temp_dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        create_test_photo(&temp_dir, "root.jpg");

        let nested_path = subdir.join("nested.jpg");
        let mut file = File::create(&nested_path).unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let scanner = FolderScanner::new(ScanConfig::default());
        let records = scanner.scan(temp_dir.path(), &registry()).unwrap();

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn scan_order_is_lexicographic() {
        let temp_dir = TempDir::new().unwrap();
        // Created out of order on purpose
        create_test_photo(&temp_dir, "c.jpg");
        create_test_photo(&temp_dir, "a.jpg");
        create_test_photo(&temp_dir, "b.jpg");

        let scanner = FolderScanner::new(ScanConfig::default());
        let records = scanner.scan(temp_dir.path(), &registry()).unwrap();

        let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn scan_excludes_hidden_files_by_default() {
        let temp_dir = TempDir::new().unwrap();
        create_test_photo(&temp_dir, "visible.jpg");
        create_test_photo(&temp_dir, ".hidden.jpg");

        let scanner = FolderScanner::new(ScanConfig::default());
        let records = scanner.scan(temp_dir.path(), &registry()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "visible.jpg");
    }

    #[test]
    fn scan_records_have_no_date_without_exif() {
        let temp_dir = TempDir::new().unwrap();
        create_test_photo(&temp_dir, "photo.jpg");

        let scanner = FolderScanner::new(ScanConfig::default());
        let records = scanner.scan(temp_dir.path(), &registry()).unwrap();

        assert!(records[0].capture_date.is_none());
    }

    #[test]
    fn scan_nonexistent_directory_returns_error() {
        let scanner = FolderScanner::new(ScanConfig::default());
        let result = scanner.scan(Path::new("/nonexistent/path/12345"), &registry());

        assert!(result.is_err());
    }
}
