//! Styled table assembly.

use std::fmt::Display;

use crate::error::{Error, Result};
use crate::model::{Document, Table, TableCell};

use super::{RowOverflow, TablePolicy};

/// Build one styled table into `doc`, followed by one empty spacer paragraph.
///
/// Shorthand for `TableBuilder::new(policy).build(doc, headers, rows)`.
pub fn build_table<H, R, V>(
    doc: &mut Document,
    headers: &[H],
    rows: impl IntoIterator<Item = R>,
    policy: &TablePolicy,
) -> Result<()>
where
    H: AsRef<str>,
    R: IntoIterator<Item = V>,
    V: Display,
{
    TableBuilder::new(policy).build(doc, headers, rows)
}

/// Assembles header/row data into styled tables.
///
/// The table is assembled detached from the document and appended only once
/// it is complete, so a failed build leaves the document unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder<'a> {
    policy: &'a TablePolicy,
}

impl<'a> TableBuilder<'a> {
    /// Create a builder applying `policy`.
    pub fn new(policy: &'a TablePolicy) -> Self {
        Self { policy }
    }

    /// The policy this builder applies.
    pub fn policy(&self) -> &TablePolicy {
        self.policy
    }

    /// Build a table into `doc` and append the spacer paragraph after it.
    pub fn build<H, R, V>(
        &self,
        doc: &mut Document,
        headers: &[H],
        rows: impl IntoIterator<Item = R>,
    ) -> Result<()>
    where
        H: AsRef<str>,
        R: IntoIterator<Item = V>,
        V: Display,
    {
        let table = self.assemble(headers, rows)?;
        doc.add_table(table);
        doc.add_empty_paragraph();
        Ok(())
    }

    /// Assemble a table without attaching it to a document.
    pub fn assemble<H, R, V>(&self, headers: &[H], rows: impl IntoIterator<Item = R>) -> Result<Table>
    where
        H: AsRef<str>,
        R: IntoIterator<Item = V>,
        V: Display,
    {
        let columns = headers.len();
        if columns == 0 {
            return Err(Error::EmptyHeaders);
        }

        let mut table = Table::new(1, columns);
        table.set_style(self.policy.style_name.as_str());

        if columns == 1 && self.policy.suppress_border_if_single_column {
            log::debug!("Single-column table, suppressing borders");
            table.suppress_borders();
        }

        for (i, header) in headers.iter().enumerate() {
            let cell = table.cell_mut(0, i)?;
            cell.set_text(header.as_ref());
            self.format_cell(cell, true);
        }

        for (r, row) in rows.into_iter().enumerate() {
            let mut values: Vec<String> = row.into_iter().map(|v| v.to_string()).collect();

            if values.len() > columns {
                match self.policy.overflow {
                    RowOverflow::Error => {
                        return Err(Error::RowTooWide {
                            row: r,
                            len: values.len(),
                            columns,
                        });
                    }
                    RowOverflow::Truncate => {
                        log::warn!(
                            "Row {} has {} values for {} columns, dropping the extra values",
                            r,
                            values.len(),
                            columns
                        );
                        values.truncate(columns);
                    }
                }
            } else if values.len() < columns {
                log::debug!(
                    "Row {} has {} of {} values, trailing cells left blank",
                    r,
                    values.len(),
                    columns
                );
            }

            let row_index = table.row_count();
            table.add_row();
            for (i, text) in values.into_iter().enumerate() {
                let cell = table.cell_mut(row_index, i)?;
                cell.set_text(text);
                self.format_cell(cell, false);
            }
        }

        log::debug!(
            "Assembled table: {} rows x {} columns",
            table.row_count(),
            columns
        );

        Ok(table)
    }

    fn format_cell(&self, cell: &mut TableCell, header: bool) {
        for run in cell.runs_mut() {
            run.set_bold(header);
            if let Some(size) = self.policy.force_font_size {
                run.set_font_size(size);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BorderEdge, BorderValue};
    use crate::row;

    #[test]
    fn test_assemble_dimensions_and_text() {
        let policy = TablePolicy::verbose();
        let table = TableBuilder::new(&policy)
            .assemble(&["No", "Name", "FN"], [row!["1", "Student Name", 12345]])
            .unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.cell(0, 1).unwrap().plain_text(), "Name");
        assert_eq!(table.cell(1, 2).unwrap().plain_text(), "12345");
        assert_eq!(table.style.as_deref(), Some("Table Grid"));
    }

    #[test]
    fn test_header_bold_data_plain() {
        let policy = TablePolicy::compact();
        let table = TableBuilder::new(&policy)
            .assemble(&["A", "B"], [["x", "y"]])
            .unwrap();

        let header = table.header().unwrap();
        assert!(header.cells.iter().flat_map(|c| c.runs()).all(|r| r.style.bold));
        assert!(table.body()[0]
            .cells
            .iter()
            .flat_map(|c| c.runs())
            .all(|r| !r.style.bold && r.style.font_size.is_none()));
    }

    #[test]
    fn test_single_column_border_policy() {
        let compact = TablePolicy::compact();
        let table = TableBuilder::new(&compact)
            .assemble(&["Course"], [["Web Technologies - 2025"]])
            .unwrap();
        assert!(table.is_borderless());

        let verbose = TablePolicy::verbose();
        let table = TableBuilder::new(&verbose)
            .assemble(&["Course"], [["Web Technologies - 2025"]])
            .unwrap();
        assert!(table.borders.is_empty());

        let table = TableBuilder::new(&compact)
            .assemble(&["A", "B"], Vec::<Vec<&str>>::new())
            .unwrap();
        assert_eq!(table.border(BorderEdge::Top), None);
        assert_ne!(table.border(BorderEdge::InsideV), Some(BorderValue::Nil));
    }

    #[test]
    fn test_empty_headers_rejected() {
        let policy = TablePolicy::default();
        let headers: [&str; 0] = [];
        let err = TableBuilder::new(&policy)
            .assemble(&headers, Vec::<Vec<&str>>::new())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyHeaders));
    }

    #[test]
    fn test_overflow_truncate() {
        let policy = TablePolicy::default().with_overflow(RowOverflow::Truncate);
        let table = TableBuilder::new(&policy)
            .assemble(&["A", "B"], [["1", "2", "3"]])
            .unwrap();
        assert_eq!(table.body()[0].plain_text(), "1\t2");
    }

    #[test]
    fn test_build_appends_table_then_spacer() {
        let mut doc = Document::new();
        let policy = TablePolicy::default();
        build_table(&mut doc, &["A"], [["1"]], &policy).unwrap();

        assert_eq!(doc.block_count(), 2);
        assert!(doc.blocks[0].is_table());
        assert!(matches!(&doc.blocks[1], Block::Paragraph(p) if p.runs.is_empty()));
    }

    #[test]
    fn test_failed_build_leaves_document_untouched() {
        let mut doc = Document::new();
        doc.add_heading("Before", 1);
        let policy = TablePolicy::default();

        let result = build_table(&mut doc, &["A", "B"], [vec!["1", "2"], vec!["1", "2", "3"]], &policy);

        assert!(matches!(
            result,
            Err(Error::RowTooWide {
                row: 1,
                len: 3,
                columns: 2
            })
        ));
        assert_eq!(doc.block_count(), 1);
    }
}
