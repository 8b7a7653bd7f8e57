//! Plain text rendering for documents.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Table cells are tab-separated, one row per line.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    if options.include_frontmatter {
        if let Some(ref title) = doc.metadata.title {
            output.push_str(title);
            output.push_str("\n\n");
        }
    }

    output.push_str(&doc.plain_text());
    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_table, TablePolicy};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_heading("Project Author", 2);
        build_table(
            &mut doc,
            &["No", "Name"],
            [["1", "Student Name"]],
            &TablePolicy::compact(),
        )
        .unwrap();

        let result = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result, "Project Author\n\nNo\tName\n1\tStudent Name");
    }

    #[test]
    fn test_to_text_with_title() {
        let mut doc = Document::new();
        doc.metadata.title = Some("Specs".to_string());
        doc.add_paragraph("Body");

        let options = RenderOptions::new().with_frontmatter(true);
        assert_eq!(to_text(&doc, &options).unwrap(), "Specs\n\nBody");
    }
}
