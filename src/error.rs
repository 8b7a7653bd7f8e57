//! Error types for tabdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for tabdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or saving a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error while assembling the DOCX package.
    #[error("DOCX packaging error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A table was requested without any column headers.
    #[error("Table requires at least one header column")]
    EmptyHeaders,

    /// A data row carries more values than the table has columns.
    #[error("Row {row} has {len} values but the table has {columns} columns")]
    RowTooWide {
        /// Zero-based index of the offending data row
        row: usize,
        /// Number of values in the row
        len: usize,
        /// Number of table columns
        columns: usize,
    },

    /// A cell was addressed outside the table grid.
    #[error("Cell ({row}, {column}) is out of range (table is {rows}x{columns})")]
    CellOutOfRange {
        /// Requested row index
        row: usize,
        /// Requested column index
        column: usize,
        /// Rows in the table
        rows: usize,
        /// Columns in the table
        columns: usize,
    },

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// No report is registered under the given name.
    #[error("Unknown report: {0}")]
    UnknownReport(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
