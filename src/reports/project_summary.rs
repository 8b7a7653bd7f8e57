//! "Assignment 1, Project Summary" report.

use crate::builder::{TableBuilder, TablePolicy};
use crate::error::Result;
use crate::model::{Document, DocumentDefaults, Metadata};

/// Title of the summary report.
pub const TITLE: &str = "Assignment 1, Project Summary";

const DESCRIPTION: &str = "The UniRoom Scheduler allows students/teachers to view room \
    availability and book resources. Developed using HTML/CSS/JS (Frontend) and \
    Node.js/Express + MongoDB (Backend). Features include Base Schedule (immutable), \
    Search/Filter, and User Roles: Anonymous, Student (Book max 2h), Teacher (Priority \
    Override), Admin.";

/// Build the project summary with compact table styling.
pub fn build() -> Result<Document> {
    let mut doc = Document::with_defaults(DocumentDefaults::new("Calibri", 11.0));
    doc.metadata = Metadata::with_title(TITLE);
    doc.metadata.subject = Some("UniRoom Scheduler".to_string());

    let policy = TablePolicy::compact();
    let tables = TableBuilder::new(&policy);

    doc.add_heading(TITLE, 1);
    tables.build(&mut doc, &["Course"], [["Web Technologies - 2025"]])?;

    doc.add_heading("Project Author", 2);
    tables.build(
        &mut doc,
        &["No", "Name", "FN"],
        [
            ["1", "Student Name", "12345"],
            ["2", "Partner Name", "67890"],
        ],
    )?;

    doc.add_heading("Project Name", 2);
    tables.build(&mut doc, &["Project name"], [["UniRoom Scheduler"]])?;

    doc.add_heading(
        "Short project description (Business needs and system features)",
        2,
    );
    tables.build(&mut doc, &["Description"], [[DESCRIPTION]])?;

    doc.add_heading("Main Use Cases / Scenarios", 2);
    tables.build(
        &mut doc,
        &["Use case name", "Brief Descriptions", "Actors Involved"],
        [
            [
                "Register/Login",
                "Register as Student/Teacher. Login validates priority.",
                "Anonymous",
            ],
            ["Browse Schedule", "View Base Schedule + Bookings.", "All Users"],
            [
                "Filter & Search",
                "Filter by Type (Lab/Lecture) or Time. Search by Room #.",
                "Student, Teacher",
            ],
            [
                "Reserve Room",
                "Book free slot. Max duration: 2 hours.",
                "Student, Teacher",
            ],
            [
                "Teacher Override",
                "Teacher cancels Student booking to claim slot.",
                "Teacher",
            ],
            [
                "Manage System",
                "CRUD for Rooms, Users, and Base Schedule.",
                "Administrator",
            ],
        ],
    )?;

    doc.add_heading("Main Views (SPA Frontend)", 2);
    tables.build(
        &mut doc,
        &["View name", "Brief Descriptions", "URI"],
        [
            ["Home/Login", "Login/Register forms.", "/"],
            ["Dashboard", "Interactive timetable with filters.", "/dashboard"],
            ["Room Details", "Room features and weekly view.", "/rooms/{id}"],
            ["My Bookings", "User reservations list.", "/my-bookings"],
            ["Admin Panel", "Manage Users/Rooms/Base Schedule.", "/admin"],
        ],
    )?;

    doc.add_heading("API Resources (Node.js Backend)", 2);
    tables.build(
        &mut doc,
        &["Resource", "Brief Descriptions", "URI"],
        [
            ["Auth", "Login/Register.", "/api/auth"],
            ["Users", "Manage users/roles.", "/api/users"],
            ["Rooms", "CRUD Rooms.", "/api/rooms"],
            ["Schedule", "GET combined schedule.", "/api/schedule"],
            ["Bookings", "POST reservation (checks 2h limit).", "/api/bookings"],
            ["Override", "POST teacher override logic.", "/api/bookings/override"],
        ],
    )?;

    Ok(doc)
}
