//! Document model types for word-processor content.
//!
//! This module is the in-memory document object model that report builders
//! write into and that the DOCX writer and preview renderers read from.
//! Blocks are kept in insertion order; the model performs no layout.

mod block;
mod document;
mod paragraph;
mod table;

pub use block::Block;
pub use document::{Document, DocumentDefaults, Metadata};
pub use paragraph::{Alignment, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use table::{BorderEdge, BorderValue, Table, TableBorders, TableCell, TableRow};
