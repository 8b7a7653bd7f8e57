//! Markdown preview rendering.

use crate::error::Result;
use crate::model::{Block, Document, Paragraph, Table, TextRun};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for block in &doc.blocks {
            self.render_block(&mut output, block);
        }

        Ok(output.trim().to_string())
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Table(t) => self.render_table(output, t),
            Block::PageBreak => output.push_str("---\n\n"),
        }
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }

        if let Some(level) = para.style.heading_level {
            // The title renders as a top-level heading
            let level = level.max(1).min(self.options.max_heading_level.max(1));
            output.push_str(&"#".repeat(level as usize));
            output.push(' ');
            self.render_runs(output, &para.runs);
            output.push_str("\n\n");
            return;
        }

        if para.style.bullet {
            output.push(self.options.list_marker);
            output.push(' ');
            self.render_runs(output, &para.runs);
            output.push_str("\n\n");
            return;
        }

        if para.style.left_indent.is_some() {
            output.push_str("> ");
        }
        self.render_runs(output, &para.runs);
        output.push_str("\n\n");
    }

    fn render_runs(&self, output: &mut String, runs: &[TextRun]) {
        for run in runs {
            let text = if self.options.escape_special_chars {
                escape_markdown(&run.text)
            } else {
                run.text.clone()
            };
            let text = text.replace('\n', "  \n");

            let mut styled = text;
            if run.style.italic {
                styled = format!("*{}*", styled);
            }
            if run.style.bold {
                styled = format!("**{}**", styled);
            }
            output.push_str(&styled);
        }
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        if table.is_empty() {
            return;
        }

        // A borderless single-column table reads as a captioned note
        if table.column_count() == 1 && table.is_borderless() {
            self.render_note(output, table);
            return;
        }

        self.render_table_markdown(output, table);
    }

    // The header run is bold, so the caption comes out as **caption**
    fn render_note(&self, output: &mut String, table: &Table) {
        let paragraphs = table
            .rows
            .iter()
            .flat_map(|row| &row.cells)
            .flat_map(|cell| &cell.paragraphs)
            .filter(|para| !para.is_empty());

        for para in paragraphs {
            self.render_runs(output, &para.runs);
            output.push_str("\n\n");
        }
    }

    fn render_table_markdown(&self, output: &mut String, table: &Table) {
        for (i, row) in table.rows.iter().enumerate() {
            output.push('|');
            for cell in &row.cells {
                let content = cell.plain_text().replace('\n', " ");
                let content = if self.options.escape_special_chars {
                    escape_markdown(content.trim())
                } else {
                    content.trim().to_string()
                };
                output.push_str(&format!(" {} |", content));
            }
            output.push('\n');

            if i == 0 {
                output.push('|');
                for _ in &row.cells {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_table, TablePolicy};

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("password_hash"), "password\\_hash");
        assert_eq!(escape_markdown("[Mon...]"), "\\[Mon...\\]");
    }

    #[test]
    fn test_render_heading_and_title() {
        let mut doc = Document::new();
        doc.add_heading("Report", 0);
        doc.add_heading("Section", 2);

        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert!(result.starts_with("# Report\n\n## Section"));
    }

    #[test]
    fn test_render_bullet_and_indent() {
        let mut doc = Document::new();
        doc.add_bullet("Conflict Detection:");
        doc.add_paragraph("step").style.left_indent = Some(36.0);

        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert!(result.contains("- Conflict Detection:"));
        assert!(result.contains("> step"));
    }

    #[test]
    fn test_render_grid_table() {
        let mut doc = Document::new();
        build_table(
            &mut doc,
            &["Field", "Type"],
            [["_id", "ObjectId"]],
            &TablePolicy::verbose(),
        )
        .unwrap();

        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(
            result,
            "| Field | Type |\n| --- | --- |\n| \\_id | ObjectId |"
        );
    }

    #[test]
    fn test_render_borderless_note() {
        let mut doc = Document::new();
        build_table(
            &mut doc,
            &["Project name"],
            [["UniRoom Scheduler"]],
            &TablePolicy::compact(),
        )
        .unwrap();

        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(result, "**Project name**\n\nUniRoom Scheduler");
    }

    #[test]
    fn test_render_with_frontmatter() {
        let mut doc = Document::new();
        doc.metadata.title = Some("Test Doc".to_string());

        let options = RenderOptions::new().with_frontmatter(true);
        let result = to_markdown(&doc, &options).unwrap();
        assert!(result.starts_with("---"));
        assert!(result.contains("title: \"Test Doc\""));
    }
}
