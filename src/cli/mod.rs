//! # CLI Module
//!
//! Command-line interface for the contact sheet builder.
//!
//! ## Usage
//! ```bash
//! # Build a contact sheet from a zip archive of photos
//! field-report ~/photos/Trip_Report.zip
//!
//! # Without an argument the path is asked for interactively
//! field-report
//! ```

use clap::Parser;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use photo_contact_sheet::core::archive::ExtractedArchive;
use photo_contact_sheet::core::pipeline::{ProgressUpdate, ReportOutcome, ReportPipeline};
use photo_contact_sheet::error::ArchiveError;
use photo_contact_sheet::Result;
use std::path::PathBuf;

/// Field Report Builder - dated photo contact sheets as PDF
#[derive(Parser, Debug)]
#[command(name = "field-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Zip archive of photos (asked for interactively when omitted)
    zip: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> Result<()> {
    photo_contact_sheet::init_tracing();

    let cli = Cli::parse();
    let term = Term::stderr();

    term.write_line(&format!(
        "{} {}",
        style("Field Report Builder").bold().cyan(),
        style("v0.1.0").dim()
    ))
    .ok();

    let zip_path = match cli.zip {
        Some(path) => path,
        None => {
            term.write_str("Enter the path to your ZIP file: ").ok();
            PathBuf::from(term.read_line().unwrap_or_default().trim())
        }
    };

    if let Err(e) = ExtractedArchive::validate(&zip_path) {
        let message = match e {
            ArchiveError::NotAZipFile { .. } => "Please provide a valid ZIP file.",
            _ => "Provided file does not exist.",
        };
        term.write_line(&format!("{} {}", style("✗").red().bold(), message))
            .ok();
        std::process::exit(1);
    }

    let pipeline = ReportPipeline::builder(zip_path).build();

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    let result = pipeline.run_with_progress(|update| match update {
        ProgressUpdate::Scanned { total } => {
            progress.set_length(total as u64);
        }
        ProgressUpdate::FileAdded {
            filename,
            label,
            completed,
            ..
        } => {
            progress.println(format!("Adding to PDF: {} - Date Taken: {}", filename, label));
            progress.set_position(completed as u64);
        }
        ProgressUpdate::FileSkipped { filename, reason } => {
            progress.println(format!("Skipping file '{}': {}", filename, reason));
            progress.inc(1);
        }
        ProgressUpdate::PagesComposed { .. } => {
            progress.set_message("writing PDF");
        }
    })?;

    progress.finish_and_clear();

    match result.outcome {
        ReportOutcome::NoImages => {
            term.write_line("No image files found.").ok();
        }
        ReportOutcome::NoValidImages => {
            term.write_line("No valid images to add to PDF.").ok();
        }
        ReportOutcome::Written { output, pages } => {
            term.write_line("").ok();
            term.write_line(&format!(
                "{} Contact sheet PDF created at: {}",
                style("✓").green().bold(),
                output.display()
            ))
            .ok();
            term.write_line(&format!(
                "  {} photos on {} page(s) in {:.1}s{}",
                style(result.rendered).cyan(),
                style(pages).cyan(),
                result.duration_ms as f64 / 1000.0,
                if result.skipped > 0 {
                    format!(", {} skipped", result.skipped)
                } else {
                    String::new()
                }
            ))
            .ok();
        }
    }

    Ok(())
}
