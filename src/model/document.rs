//! Document-level types.

use super::{Block, Paragraph, Table};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An in-memory word-processor document.
///
/// Blocks are appended in order and never reordered. The document owns every
/// block added to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Document-wide default run formatting
    pub defaults: DocumentDefaults,

    /// Block-level content in insertion order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document with default formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty document with explicit default formatting.
    pub fn with_defaults(defaults: DocumentDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Append a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append a paragraph and return it for further styling.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.push_paragraph(Paragraph::with_text(text))
    }

    /// Append a paragraph with no runs.
    pub fn add_empty_paragraph(&mut self) -> &mut Paragraph {
        self.push_paragraph(Paragraph::new())
    }

    /// Append a heading. Level 0 is the document title.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> &mut Paragraph {
        self.push_paragraph(Paragraph::heading(text, level))
    }

    /// Append a bulleted paragraph.
    pub fn add_bullet(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.push_paragraph(Paragraph::bullet(text))
    }

    /// Append a page break.
    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    /// Append a finished table.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Iterate over the tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(Block::as_table)
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Save the document as a `.docx` package.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::docx::write_file(self, path)
    }

    /// Serialize the document as `.docx` bytes.
    pub fn to_docx_bytes(&self) -> Result<Vec<u8>> {
        crate::docx::to_bytes(self)
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.blocks.push(Block::Paragraph(paragraph));
        match self.blocks.last_mut() {
            Some(Block::Paragraph(p)) => p,
            _ => unreachable!("paragraph was just pushed"),
        }
    }
}

/// Document-wide default run formatting, written to the `Normal` style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDefaults {
    /// Default font family
    pub font_name: String,

    /// Default font size in points
    pub font_size: f32,
}

impl DocumentDefaults {
    /// Create defaults with the given font.
    pub fn new(font_name: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_name: font_name.into(),
            font_size,
        }
    }

    /// Set the font and return self.
    pub fn with_font(mut self, font_name: impl Into<String>, font_size: f32) -> Self {
        self.font_name = font_name.into();
        self.font_size = font_size;
        self
    }
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self::new("Calibri", 11.0)
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref subject) = self.subject {
            lines.push(format!("subject: \"{}\"", escape_yaml(subject)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref keywords) = self.keywords {
            lines.push(format!("keywords: \"{}\"", escape_yaml(keywords)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.defaults.font_name, "Calibri");
        assert_eq!(doc.defaults.font_size, 11.0);
    }

    #[test]
    fn test_blocks_keep_insertion_order() {
        let mut doc = Document::new();
        doc.add_heading("Title", 1);
        doc.add_paragraph("Body").style.left_indent = Some(36.0);
        doc.add_page_break();
        doc.add_table(Table::new(1, 2));
        doc.add_empty_paragraph();

        assert_eq!(doc.block_count(), 5);
        assert!(doc.blocks[0].as_paragraph().is_some_and(Paragraph::is_heading));
        assert_eq!(
            doc.blocks[1].as_paragraph().and_then(|p| p.style.left_indent),
            Some(36.0)
        );
        assert!(matches!(doc.blocks[2], Block::PageBreak));
        assert_eq!(doc.tables().count(), 1);
        assert!(doc.blocks[4].as_paragraph().is_some_and(Paragraph::is_empty));
    }

    #[test]
    fn test_plain_text_skips_empty_blocks() {
        let mut doc = Document::new();
        doc.add_paragraph("One");
        doc.add_empty_paragraph();
        doc.add_paragraph("Two");

        assert_eq!(doc.plain_text(), "One\n\nTwo");
    }

    #[test]
    fn test_metadata_frontmatter() {
        let mut metadata = Metadata::with_title("Test \"Doc\"");
        metadata.author = Some("Student Name".to_string());

        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Test \\\"Doc\\\"\""));
        assert!(yaml.contains("author: \"Student Name\""));
    }

    #[test]
    fn test_defaults_builder() {
        let defaults = DocumentDefaults::default().with_font("Arial", 12.0);
        assert_eq!(defaults, DocumentDefaults::new("Arial", 12.0));
    }
}
