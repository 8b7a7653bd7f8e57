//! "University Room Booking - Database Configuration" report.

use crate::builder::{TableBuilder, TablePolicy};
use crate::error::Result;
use crate::model::{Alignment, Document, Metadata};

/// Title of the database configuration report.
pub const TITLE: &str = "University Room Booking - Database Configuration";

/// Indent used for the priority-logic steps (half an inch).
const STEP_INDENT: f32 = 36.0;

const SCHEMA_HEADERS: [&str; 4] = ["Field", "Type", "Constraints", "Description"];

/// Build the database configuration report with verbose table styling.
pub fn build() -> Result<Document> {
    let mut doc = Document::new();
    doc.metadata = Metadata::with_title(TITLE);
    doc.metadata.subject = Some("Database Configuration".to_string());

    let policy = TablePolicy::verbose();
    let tables = TableBuilder::new(&policy);

    doc.add_heading(TITLE, 0).style.alignment = Alignment::Center;

    doc.add_heading("1. Database Overview", 1);
    tables.build(
        &mut doc,
        &["Configuration", "Details"],
        [
            ["Database System", "MongoDB"],
            ["ODM/Framework", "Mongoose (Node.js)"],
            ["Architecture", "Document-Oriented (Collections)"],
        ],
    )?;

    doc.add_heading("2. Collection Schemas", 1);

    doc.add_heading("A. Users Collection", 2);
    tables.build(
        &mut doc,
        &SCHEMA_HEADERS,
        [
            ["_id", "ObjectId", "Auto-generated", "Unique ID"],
            ["username", "String", "Unique, Required", "Login handle"],
            ["password_hash", "String", "Required", "Encrypted password"],
            ["email", "String", "Required", "Contact email"],
            ["role", "String", "Enum: ['student',...]", "Access rights"],
            ["createdAt", "Date", "Default: Date.now", "Creation time"],
        ],
    )?;

    doc.add_heading("B. Rooms Collection", 2);
    tables.build(
        &mut doc,
        &SCHEMA_HEADERS,
        [
            ["id", "ObjectId", "Auto-generated", "Unique ID"],
            ["roomNumber", "String", "Unique, Required", "e.g., \"101B\""],
            ["capacity", "Integer", "Required", "Max people"],
            ["type", "String", "Enum: ['normal'...]", "Filter category"],
            ["features", "Array", "Optional", "e.g., Projector"],
        ],
    )?;

    doc.add_heading("C. BaseSchedule Collection (Official Timetable)", 2);
    tables.build(
        &mut doc,
        &SCHEMA_HEADERS,
        [
            ["id", "ObjectId", "Auto-generated", "Unique ID"],
            ["room_id", "ObjectId", "Ref: Rooms", "Room Link"],
            ["subject", "String", "Required", "Class Name"],
            ["dayOfWeek", "String", "Enum: ['Mon'...]", "Repeats on"],
            ["startTime", "String", "24h format", "Start (08:30)"],
            ["endTime", "String", "24h format", "End (10:00)"],
            ["semester", "String", "Required", "Current Term"],
        ],
    )?;

    doc.add_heading("D. Bookings Collection (Dynamic)", 2);
    tables.build(
        &mut doc,
        &SCHEMA_HEADERS,
        [
            ["_id", "ObjectId", "Auto-generated", "Unique ID"],
            ["room_id", "ObjectId", "Ref: Rooms", "Room Link"],
            ["user_id", "ObjectId", "Ref: Users", "User Link"],
            ["startTime", "Date", "Required", "ISO Timestamp"],
            ["endTime", "Date", "Required", "ISO Timestamp"],
            ["status", "String", "Enum: ['confirmed'...]", "Booking State"],
            ["overriddenBy", "ObjectId", "Ref: Users", "Teacher Override"],
        ],
    )?;

    doc.add_page_break();
    doc.add_heading("3. Priority Logic (Teacher Override)", 1);

    doc.add_bullet("Conflict Detection:");
    doc.add_paragraph("(newStart < existingEnd) AND (newEnd > existingStart)")
        .style
        .left_indent = Some(STEP_INDENT);

    doc.add_bullet("Booking Request Flow:");
    let steps = [
        "1. Check Base Schedule for official classes -> Block if conflict",
        "2. Check Existing Bookings:",
        "    a. If empty -> Allow",
        "    b. If booked by teacher -> Reject (Teachers have priority)",
        "    c. If booked by student & requester is teacher -> Override/Cancel",
        "    d. If booked by student & requester is student -> Reject (max 2 hours)",
    ];
    for step in steps {
        doc.add_paragraph(step).style.left_indent = Some(STEP_INDENT);
    }

    doc.add_heading("4. Database Indexing & Optimization", 1);

    doc.add_heading("Room Indexes:", 2);
    doc.add_bullet("{ roomNumber: 1 } - Fast lookup by room code");
    doc.add_bullet("{ type: 1, capacity: 1 } - Filter by attributes");

    doc.add_heading("Booking Indexes:", 2);
    doc.add_bullet("{ room_id: 1, startTime: 1, endTime: 1 } - Conflict detection");
    doc.add_bullet("{ user_id: 1, startTime: -1 } - User history & 2-hour check");

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_tables_are_10pt_with_borders() {
        let doc = build().unwrap();
        let tables: Vec<_> = doc.tables().collect();
        assert_eq!(tables.len(), 5);

        for table in tables {
            assert!(table.borders.is_empty());
            for row in &table.rows {
                for cell in &row.cells {
                    assert!(cell.runs().all(|r| r.style.font_size == Some(10.0)));
                }
            }
        }
    }

    #[test]
    fn test_title_centered_and_page_break() {
        let doc = build().unwrap();
        let title = doc.blocks[0].as_paragraph().unwrap();
        assert_eq!(title.heading_level(), Some(0));
        assert_eq!(title.style.alignment, Alignment::Center);
        assert!(doc.blocks.iter().any(|b| matches!(b, Block::PageBreak)));
    }
}
