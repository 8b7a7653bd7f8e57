//! Block-level content.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A block-level child of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text (headings and list items included)
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A page break marker
    PageBreak,
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the table if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::PageBreak => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_variants() {
        let p = Block::Paragraph(Paragraph::with_text("x"));
        assert!(p.is_paragraph());
        assert!(p.as_table().is_none());

        let t = Block::Table(Table::new(1, 1));
        assert!(t.is_table());
        assert!(t.as_paragraph().is_none());

        assert_eq!(Block::PageBreak.plain_text(), "");
    }
}
