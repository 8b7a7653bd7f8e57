//! Table types.

use super::{Paragraph, TextRun};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A table structure.
///
/// The grid is rectangular: every row holds exactly [`Table::column_count`]
/// cells, fixed when the table is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table; the first row is the header
    pub rows: Vec<TableRow>,

    /// Named table style (e.g. "Table Grid")
    pub style: Option<String>,

    /// Direct border overrides on top of the style
    pub borders: TableBorders,

    columns: usize,
}

impl Table {
    /// Create a grid of `rows` x `columns` blank cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| TableRow::blank(columns)).collect(),
            style: None,
            borders: TableBorders::default(),
            columns,
        }
    }

    /// Append a row of blank cells and return it.
    pub fn add_row(&mut self) -> &mut TableRow {
        self.rows.push(TableRow::blank(self.columns));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Set the named table style.
    pub fn set_style(&mut self, name: impl Into<String>) {
        self.style = Some(name.into());
    }

    /// Override a single border edge.
    pub fn set_border(&mut self, edge: BorderEdge, value: BorderValue) {
        self.borders.set(edge, value);
    }

    /// Get the direct override for a border edge, if any.
    pub fn border(&self, edge: BorderEdge) -> Option<BorderValue> {
        self.borders.get(edge)
    }

    /// Set every border edge to [`BorderValue::Nil`].
    pub fn suppress_borders(&mut self) {
        for edge in BorderEdge::ALL {
            self.set_border(edge, BorderValue::Nil);
        }
    }

    /// Check whether every border edge is suppressed.
    pub fn is_borderless(&self) -> bool {
        BorderEdge::ALL
            .iter()
            .all(|&edge| self.border(edge) == Some(BorderValue::Nil))
    }

    /// Get a cell by position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    /// Get a mutable cell by position, failing outside the grid.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> Result<&mut TableCell> {
        let (rows, columns) = (self.rows.len(), self.columns);
        self.rows
            .get_mut(row)
            .and_then(|r| r.cells.get_mut(column))
            .ok_or(Error::CellOutOfRange {
                row,
                column,
                rows,
                columns,
            })
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the header row.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Get body rows (non-header).
    pub fn body(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row of blank cells.
    pub fn blank(columns: usize) -> Self {
        Self {
            cells: (0..columns).map(|_| TableCell::blank()).collect(),
        }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content; never empty, a cell always holds one paragraph
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Create a blank cell holding one empty paragraph.
    pub fn blank() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
        }
    }

    /// Replace the cell content with a single paragraph of one run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.paragraphs = vec![Paragraph::with_text(text)];
    }

    /// Iterate over every run in every paragraph of the cell.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.paragraphs.iter().flat_map(|p| p.runs.iter())
    }

    /// Iterate mutably over every run in every paragraph of the cell.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut TextRun> {
        self.paragraphs.iter_mut().flat_map(|p| p.runs.iter_mut())
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_empty)
    }
}

impl Default for TableCell {
    fn default() -> Self {
        Self::blank()
    }
}

/// One of the six table border edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderEdge {
    /// Outer top edge
    Top,
    /// Outer left edge
    Left,
    /// Outer bottom edge
    Bottom,
    /// Outer right edge
    Right,
    /// Horizontal lines between rows
    InsideH,
    /// Vertical lines between columns
    InsideV,
}

impl BorderEdge {
    /// All edges in `w:tblBorders` schema order.
    pub const ALL: [BorderEdge; 6] = [
        BorderEdge::Top,
        BorderEdge::Left,
        BorderEdge::Bottom,
        BorderEdge::Right,
        BorderEdge::InsideH,
        BorderEdge::InsideV,
    ];

    /// Element name inside `w:tblBorders`.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            BorderEdge::Top => "top",
            BorderEdge::Left => "left",
            BorderEdge::Bottom => "bottom",
            BorderEdge::Right => "right",
            BorderEdge::InsideH => "insideH",
            BorderEdge::InsideV => "insideV",
        }
    }
}

/// Value of a border edge override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderValue {
    /// No border
    Nil,
    /// Thin single line
    Single,
}

impl BorderValue {
    /// Value of the `w:val` attribute.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            BorderValue::Nil => "nil",
            BorderValue::Single => "single",
        }
    }
}

/// Direct border overrides; `None` edges fall back to the table style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBorders {
    /// Outer top edge
    pub top: Option<BorderValue>,
    /// Outer left edge
    pub left: Option<BorderValue>,
    /// Outer bottom edge
    pub bottom: Option<BorderValue>,
    /// Outer right edge
    pub right: Option<BorderValue>,
    /// Horizontal inner lines
    pub inside_h: Option<BorderValue>,
    /// Vertical inner lines
    pub inside_v: Option<BorderValue>,
}

impl TableBorders {
    /// Get the override for an edge.
    pub fn get(&self, edge: BorderEdge) -> Option<BorderValue> {
        match edge {
            BorderEdge::Top => self.top,
            BorderEdge::Left => self.left,
            BorderEdge::Bottom => self.bottom,
            BorderEdge::Right => self.right,
            BorderEdge::InsideH => self.inside_h,
            BorderEdge::InsideV => self.inside_v,
        }
    }

    /// Set the override for an edge.
    pub fn set(&mut self, edge: BorderEdge, value: BorderValue) {
        let slot = match edge {
            BorderEdge::Top => &mut self.top,
            BorderEdge::Left => &mut self.left,
            BorderEdge::Bottom => &mut self.bottom,
            BorderEdge::Right => &mut self.right,
            BorderEdge::InsideH => &mut self.inside_h,
            BorderEdge::InsideV => &mut self.inside_v,
        };
        *slot = Some(value);
    }

    /// Check if no edge is overridden.
    pub fn is_empty(&self) -> bool {
        BorderEdge::ALL.iter().all(|&edge| self.get(edge).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new(1, 3);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 3);
        assert!(table.body().is_empty());
        assert!(table.cell(0, 2).is_some_and(TableCell::is_empty));
    }

    #[test]
    fn test_table_with_data() {
        let mut table = Table::new(1, 2);
        table.cell_mut(0, 0).unwrap().set_text("Name");
        table.cell_mut(0, 1).unwrap().set_text("Age");
        table.add_row().cells[0].set_text("Alice");

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.body().len(), 1);
        assert_eq!(table.plain_text(), "Name\tAge\nAlice\t");
    }

    #[test]
    fn test_cell_out_of_range() {
        let mut table = Table::new(1, 2);
        let err = table.cell_mut(0, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::CellOutOfRange {
                row: 0,
                column: 2,
                rows: 1,
                columns: 2
            }
        ));
        assert!(table.cell_mut(1, 0).is_err());
    }

    #[test]
    fn test_borders() {
        let mut table = Table::new(1, 1);
        assert!(table.borders.is_empty());
        assert!(!table.is_borderless());

        table.set_border(BorderEdge::Top, BorderValue::Nil);
        assert_eq!(table.border(BorderEdge::Top), Some(BorderValue::Nil));
        assert!(!table.is_borderless());

        table.suppress_borders();
        assert!(table.is_borderless());
        assert_eq!(BorderEdge::InsideV.as_ooxml(), "insideV");
    }

    #[test]
    fn test_cell_runs_mut() {
        let mut cell = TableCell::blank();
        cell.set_text("x");
        for run in cell.runs_mut() {
            run.set_bold(true);
        }
        assert!(cell.runs().all(|r| r.style.bold));
    }
}
