//! # tabdoc
//!
//! Styled DOCX report generation for Rust.
//!
//! This library builds word-processor documents in memory (headings,
//! paragraphs, bullets and styled tables) and saves them as `.docx`
//! packages. Its core is [`TableBuilder`], which turns headers and rows
//! into a formatted table according to a [`TablePolicy`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use tabdoc::{build_table, row, Document, TablePolicy};
//!
//! fn main() -> tabdoc::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add_heading("Project Author", 2);
//!
//!     let policy = TablePolicy::compact();
//!     build_table(
//!         &mut doc,
//!         &["No", "Name", "FN"],
//!         [row![1, "Student Name", 12345], row![2, "Partner Name", 67890]],
//!         &policy,
//!     )?;
//!
//!     doc.save("authors.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One table policy**: font size forcing and single-column border
//!   suppression are configuration, not separate code paths
//! - **Atomic tables**: a failed build never leaves a partial table behind
//! - **Document defaults**: the `Normal` font is set once at creation
//! - **Previews**: Markdown, plain text and JSON renderings of the same model

pub mod builder;
pub mod docx;
pub mod error;
pub mod model;
pub mod render;
pub mod reports;

// Re-export commonly used types
pub use builder::{build_table, CellValue, RowOverflow, TableBuilder, TablePolicy};
pub use docx::DocxWriter;
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, BorderEdge, BorderValue, Document, DocumentDefaults, Metadata, Paragraph,
    ParagraphStyle, Table, TableBorders, TableCell, TableRow, TextRun, TextStyle,
};
pub use render::{JsonFormat, RenderOptions};
pub use reports::Report;

use std::path::Path;

/// Build a report and save it to `path`.
///
/// # Example
///
/// ```no_run
/// use tabdoc::{generate_report, Report};
///
/// generate_report(Report::DatabaseConfig, "University_DB_Config.docx").unwrap();
/// ```
pub fn generate_report<P: AsRef<Path>>(report: Report, path: P) -> Result<Document> {
    let doc = report.build()?;
    doc.save(path)?;
    Ok(doc)
}

/// Build a report and render it to Markdown.
///
/// # Example
///
/// ```
/// use tabdoc::{report_to_markdown, Report};
///
/// let markdown = report_to_markdown(Report::ProjectSummary).unwrap();
/// assert!(markdown.starts_with("# Assignment 1, Project Summary"));
/// ```
pub fn report_to_markdown(report: Report) -> Result<String> {
    let doc = report.build()?;
    render::to_markdown(&doc, &RenderOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Report::ProjectSummary.file_name());

        let doc = generate_report(Report::ProjectSummary, &path).unwrap();
        assert!(path.exists());
        assert!(!doc.is_empty());
    }
}
