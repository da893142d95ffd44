//! Pipeline execution implementation.

use crate::core::archive::ExtractedArchive;
use crate::core::metadata::{format_label, DateReaderRegistry};
use crate::core::pdf::{report_file_name, write_pdf};
use crate::core::scanner::{FolderScanner, ScanConfig};
use crate::core::sheet::{paginate, render_page, LabelFont, SheetCell, SheetLayout};
use crate::core::sorter::sort_by_capture_date;
use crate::core::thumbnail::ThumbnailRenderer;
use crate::error::ContactSheetError;
use image::RgbImage;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

/// Result of a pipeline run
#[derive(Debug)]
pub struct ReportResult {
    /// What the run produced
    pub outcome: ReportOutcome,
    /// Image files discovered in the archive
    pub total_images: usize,
    /// Thumbnails that made it onto the sheet
    pub rendered: usize,
    /// Files skipped because they could not be decoded
    pub skipped: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Terminal state of a pipeline run
#[derive(Debug, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The archive contained no image files
    NoImages,
    /// Images were found but none could be decoded
    NoValidImages,
    /// The PDF was written
    Written { output: PathBuf, pages: usize },
}

/// Progress callbacks emitted during a run
#[derive(Debug)]
pub enum ProgressUpdate<'a> {
    /// Scanning finished
    Scanned { total: usize },
    /// A thumbnail was rendered and added to the sheet
    FileAdded {
        filename: &'a str,
        label: &'a str,
        completed: usize,
        total: usize,
    },
    /// A file could not be decoded and was skipped
    FileSkipped { filename: &'a str, reason: String },
    /// All page canvases are composed
    PagesComposed { pages: usize },
}

/// Configuration for the pipeline
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Input zip archive
    pub zip_path: PathBuf,
    /// Grid geometry of the sheets
    pub layout: SheetLayout,
    /// Scanner configuration
    pub scan_config: ScanConfig,
    /// Preferred label font file (falls back to system fonts, then bitmap)
    pub font_path: Option<PathBuf>,
    /// Output override; derived from the archive name when absent
    pub output: Option<PathBuf>,
}

/// Builder for pipeline configuration
pub struct ReportPipelineBuilder {
    config: ReportConfig,
}

impl ReportPipelineBuilder {
    /// Create a new pipeline builder for a zip archive
    pub fn new(zip_path: PathBuf) -> Self {
        Self {
            config: ReportConfig {
                zip_path,
                layout: SheetLayout::default(),
                scan_config: ScanConfig::default(),
                font_path: None,
                output: None,
            },
        }
    }

    /// Set the grid layout
    pub fn layout(mut self, layout: SheetLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Set scanner configuration
    pub fn scan_config(mut self, config: ScanConfig) -> Self {
        self.config.scan_config = config;
        self
    }

    /// Prefer a specific label font file
    pub fn font_path(mut self, path: PathBuf) -> Self {
        self.config.font_path = Some(path);
        self
    }

    /// Override the output path
    pub fn output(mut self, path: PathBuf) -> Self {
        self.config.output = Some(path);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> ReportPipeline {
        ReportPipeline {
            config: self.config,
        }
    }
}

/// The contact sheet pipeline
pub struct ReportPipeline {
    config: ReportConfig,
}

impl ReportPipeline {
    /// Create a new pipeline builder
    pub fn builder(zip_path: PathBuf) -> ReportPipelineBuilder {
        ReportPipelineBuilder::new(zip_path)
    }

    /// Run the pipeline without progress reporting
    pub fn run(&self) -> Result<ReportResult, ContactSheetError> {
        self.run_with_progress(|_| {})
    }

    /// Run the pipeline, reporting progress through `progress`
    pub fn run_with_progress<F>(&self, mut progress: F) -> Result<ReportResult, ContactSheetError>
    where
        F: FnMut(ProgressUpdate),
    {
        let start_time = Instant::now();

        // The extraction directory lives until the end of this function,
        // whichever path leaves it.
        let archive = ExtractedArchive::unpack(&self.config.zip_path)?;

        let registry = DateReaderRegistry::with_defaults();
        let scanner = FolderScanner::new(self.config.scan_config.clone());
        let mut records = scanner.scan(archive.path(), &registry)?;

        let total_images = records.len();
        progress(ProgressUpdate::Scanned {
            total: total_images,
        });

        if records.is_empty() {
            return Ok(ReportResult {
                outcome: ReportOutcome::NoImages,
                total_images: 0,
                rendered: 0,
                skipped: 0,
                duration_ms: start_time.elapsed().as_millis() as u64,
            });
        }

        sort_by_capture_date(&mut records);

        let layout = &self.config.layout;
        let mut renderer = ThumbnailRenderer::new(layout.thumb_width, layout.thumb_height);
        let mut cells = Vec::new();
        let mut skipped = 0;

        for (index, record) in records.iter().enumerate() {
            match renderer.render(&record.path, record.format) {
                Ok(thumbnail) => {
                    let label = format_label(record.capture_date);
                    progress(ProgressUpdate::FileAdded {
                        filename: &record.filename,
                        label: &label,
                        completed: index + 1,
                        total: total_images,
                    });
                    cells.push(SheetCell { thumbnail, label });
                }
                Err(e) => {
                    warn!("skipping '{}': {}", record.filename, e);
                    progress(ProgressUpdate::FileSkipped {
                        filename: &record.filename,
                        reason: e.to_string(),
                    });
                    skipped += 1;
                }
            }
        }

        let rendered = cells.len();
        if cells.is_empty() {
            return Ok(ReportResult {
                outcome: ReportOutcome::NoValidImages,
                total_images,
                rendered: 0,
                skipped,
                duration_ms: start_time.elapsed().as_millis() as u64,
            });
        }

        let font = LabelFont::load(self.config.font_path.as_deref());
        let pages: Vec<RgbImage> = paginate(cells, layout)
            .iter()
            .map(|page_cells| render_page(page_cells, layout, &font))
            .collect();
        progress(ProgressUpdate::PagesComposed { pages: pages.len() });

        let output = self
            .config
            .output
            .clone()
            .unwrap_or_else(|| report_file_name(&self.config.zip_path));
        let title = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Field Report")
            .to_string();
        write_pdf(&pages, &title, &output)?;

        Ok(ReportResult {
            outcome: ReportOutcome::Written {
                output,
                pages: pages.len(),
            },
            total_images,
            rendered,
            skipped,
            duration_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
