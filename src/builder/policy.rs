//! Table formatting policy.

use serde::{Deserialize, Serialize};

/// Style name applied to every built table unless overridden.
pub const DEFAULT_TABLE_STYLE: &str = "Table Grid";

/// Font size forced by the verbose policy.
pub const VERBOSE_FONT_SIZE: f32 = 10.0;

/// How the builder treats a row with more values than columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowOverflow {
    /// Reject the whole table with [`Error::RowTooWide`](crate::Error::RowTooWide)
    #[default]
    Error,
    /// Drop the extra values and log a warning
    Truncate,
}

/// Formatting policy for [`TableBuilder`](super::TableBuilder).
///
/// The two report styles are presets of this one policy:
///
/// | Preset | Header size | Data size | Borderless single column |
/// |---|---|---|---|
/// | [`TablePolicy::verbose`] | 10pt | 10pt | no |
/// | [`TablePolicy::compact`] | inherited | inherited | yes |
///
/// Header runs are bold under every policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePolicy {
    /// Font size forced on every run in every cell; `None` inherits
    pub force_font_size: Option<f32>,

    /// Render single-column tables without borders
    pub suppress_border_if_single_column: bool,

    /// Named table style
    pub style_name: String,

    /// Handling of rows wider than the header
    pub overflow: RowOverflow,
}

impl TablePolicy {
    /// Create a policy that inherits font size and keeps borders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verbose report styling: 10pt everywhere, borders always kept.
    pub fn verbose() -> Self {
        Self::new().with_font_size(VERBOSE_FONT_SIZE)
    }

    /// Compact summary styling: inherited sizes, borderless single-column tables.
    pub fn compact() -> Self {
        Self::new().with_border_suppression(true)
    }

    /// Force a font size in points on every run.
    pub fn with_font_size(mut self, points: f32) -> Self {
        self.force_font_size = Some(points);
        self
    }

    /// Enable or disable border suppression for single-column tables.
    pub fn with_border_suppression(mut self, suppress: bool) -> Self {
        self.suppress_border_if_single_column = suppress;
        self
    }

    /// Set the named table style.
    pub fn with_style(mut self, name: impl Into<String>) -> Self {
        self.style_name = name.into();
        self
    }

    /// Set how over-wide rows are handled.
    pub fn with_overflow(mut self, overflow: RowOverflow) -> Self {
        self.overflow = overflow;
        self
    }
}

impl Default for TablePolicy {
    fn default() -> Self {
        Self {
            force_font_size: None,
            suppress_border_if_single_column: false,
            style_name: DEFAULT_TABLE_STYLE.to_string(),
            overflow: RowOverflow::Error,
        }
    }
}
