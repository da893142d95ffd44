//! # field-report CLI
//!
//! Command-line interface for the contact sheet builder.
//!
//! ## Usage
//! ```bash
//! field-report ~/photos/Trip_Report.zip
//! field-report            # prompts for the archive path
//! ```

mod cli;

use photo_contact_sheet::Result;

fn main() -> Result<()> {
    cli::run()
}
