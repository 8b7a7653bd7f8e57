//! Scalar cell values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A heterogeneous scalar that can be placed in a table cell.
///
/// Every variant has an infallible display form, so coercion to cell text
/// never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Free text
    Text(String),
    /// Signed integer
    Integer(i64),
    /// Unsigned integer
    Unsigned(u64),
    /// Floating point number
    Float(f64),
    /// Boolean flag
    Bool(bool),
    /// Opaque identifier, shown verbatim
    Identifier(String),
}

impl CellValue {
    /// Create an identifier value.
    pub fn id(id: impl Into<String>) -> Self {
        CellValue::Identifier(id.into())
    }
}

/// Whole floats keep a trailing `.0` and booleans are capitalised, so
/// `1.0` stays distinguishable from `1` in a cell.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::Identifier(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Unsigned(n) => write!(f, "{}", n),
            CellValue::Float(n) if n.is_nan() => f.write_str("nan"),
            CellValue::Float(n) if n.fract() == 0.0 && n.abs() < 1e16 => write!(f, "{:.1}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<char> for CellValue {
    fn from(value: char) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<f32> for CellValue {
    fn from(value: f32) -> Self {
        CellValue::Float(f64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(value: $t) -> Self {
                    CellValue::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Integer as i64: i8, i16, i32, i64, isize);
impl_from_int!(Unsigned as u64: u8, u16, u32, u64, usize);

/// Build a `Vec<CellValue>` from mixed scalars.
///
/// ```
/// use tabdoc::{row, CellValue};
///
/// let r = row!["1", "Student Name", 12345];
/// assert_eq!(r[2], CellValue::Integer(12345));
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::CellValue::from($value)),*]
    };
}
