//! Table assembly.
//!
//! [`TableBuilder`] turns a header list and a set of rows into one styled
//! table inside a [`Document`](crate::Document). Formatting is driven by a
//! [`TablePolicy`]; the verbose and compact report styles are presets of it.

mod policy;
mod table;
mod value;

pub use policy::{RowOverflow, TablePolicy, DEFAULT_TABLE_STYLE, VERBOSE_FONT_SIZE};
pub use table::{build_table, TableBuilder};
pub use value::CellValue;
