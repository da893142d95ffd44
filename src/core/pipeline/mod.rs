//! # Pipeline Module
//!
//! Orchestrates the full contact sheet workflow.
//!
//! ## Pipeline Stages
//! 1. **Extract** - unpack the zip into a scoped temp directory
//! 2. **Scan** - discover image files, attaching capture dates
//! 3. **Sort** - chronological order, undated files last
//! 4. **Render** - padded thumbnails with date labels (skip-and-continue)
//! 5. **Paginate** - fixed grids, blank-padded final page
//! 6. **Write** - a single multi-page PDF beside the input archive
//!
//! A stage that produces zero items short-circuits to a terminal
//! "nothing to do" outcome without writing output.

mod executor;

pub use executor::{
    ProgressUpdate, ReportConfig, ReportOutcome, ReportPipeline, ReportPipelineBuilder,
    ReportResult,
};
