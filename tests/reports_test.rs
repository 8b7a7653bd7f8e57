//! Integration tests for the bundled reports.

use tabdoc::render::{to_json, to_markdown, to_text};
use tabdoc::{generate_report, JsonFormat, RenderOptions, Report};

#[test]
fn test_generate_all_reports() {
    let dir = tempfile::tempdir().unwrap();

    for report in Report::all() {
        let path = dir.path().join(report.file_name());
        let doc = generate_report(report, &path).unwrap();

        assert!(path.exists());
        assert!(doc.tables().count() > 0);
        // Every table is followed by an empty spacer paragraph
        for (i, block) in doc.blocks.iter().enumerate() {
            if block.is_table() {
                let next = doc.blocks[i + 1].as_paragraph().unwrap();
                assert!(next.runs.is_empty());
            }
        }
    }
}

#[test]
fn test_summary_markdown_preview() {
    let doc = Report::ProjectSummary.build().unwrap();
    let markdown = to_markdown(&doc, &RenderOptions::new()).unwrap();

    assert!(markdown.contains("**Course**\n\nWeb Technologies - 2025"));
    assert!(markdown.contains("| No | Name | FN |"));
    assert!(markdown.contains("| Override | POST teacher override logic. | /api/bookings/override |"));
}

#[test]
fn test_database_text_preview() {
    let doc = Report::DatabaseConfig.build().unwrap();
    let text = to_text(&doc, &RenderOptions::new()).unwrap();

    assert!(text.starts_with("University Room Booking - Database Configuration"));
    assert!(text.contains("Field\tType\tConstraints\tDescription"));
    assert!(text.contains("(newStart < existingEnd) AND (newEnd > existingStart)"));
}

#[test]
fn test_json_preview_is_valid() {
    let doc = Report::DatabaseConfig.build().unwrap();
    let json = to_json(&doc, JsonFormat::Compact).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value["metadata"]["title"],
        "University Room Booking - Database Configuration"
    );
}

#[test]
fn test_reports_are_deterministic() {
    for report in Report::all() {
        let first = report.build().unwrap().to_docx_bytes().unwrap();
        let second = report.build().unwrap().to_docx_bytes().unwrap();
        assert_eq!(first, second, "{}", report);
    }
}
