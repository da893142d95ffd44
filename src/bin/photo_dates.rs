//! # photo-dates CLI
//!
//! Prints the EXIF capture date of every image file in a folder.
//!
//! ## Usage
//! ```bash
//! photo-dates ~/photos/vacation
//! ```

use clap::Parser;
use photo_contact_sheet::core::metadata::{DateReaderRegistry, EXIF_DATE_FORMAT};
use photo_contact_sheet::core::scanner::{FolderScanner, ScanConfig};
use photo_contact_sheet::Result;
use std::path::PathBuf;

/// Photo Dates - show when each photo in a folder was taken
#[derive(Parser, Debug)]
#[command(name = "photo-dates")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder to scan for photos
    folder: PathBuf,
}

fn main() -> Result<()> {
    photo_contact_sheet::init_tracing();

    let cli = Cli::parse();

    let registry = DateReaderRegistry::with_defaults();
    let scanner = FolderScanner::new(ScanConfig::default());
    let records = scanner.scan(&cli.folder, &registry)?;

    for record in records {
        let date = record
            .capture_date
            .map(|d| d.format(EXIF_DATE_FORMAT).to_string())
            .unwrap_or_else(|| "Not Found".to_string());
        println!("{}: Date Taken -> {}", record.filename, date);
    }

    Ok(())
}
