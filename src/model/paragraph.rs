//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a heading paragraph. Level 0 is the document title.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.heading_level = Some(level.min(6));
        p
    }

    /// Create a bulleted list paragraph.
    pub fn bullet(text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.style.bullet = true;
        p
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Set the left indent in points and return self.
    pub fn indent(mut self, points: f32) -> Self {
        self.style.left_indent = Some(points);
        self
    }

    /// Add plain text as a new run.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut TextRun {
        self.add_run(TextRun::new(text))
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) -> &mut TextRun {
        self.runs.push(run);
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Replace all runs with a single plain run holding `text`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.runs.clear();
        self.add_text(text);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(TextRun::is_empty)
    }

    /// Check if this is a heading (title included).
    pub fn is_heading(&self) -> bool {
        self.style.heading_level.is_some()
    }

    /// Get the heading level (0-6) or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        let mut run = Self::new(text);
        run.set_bold(true);
        run
    }

    /// Set the bold flag.
    pub fn set_bold(&mut self, bold: bool) {
        self.style.bold = bold;
    }

    /// Force an explicit font size in points.
    pub fn set_font_size(&mut self, points: f32) {
        self.style.font_size = Some(points);
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Run styling properties.
///
/// `None` fields inherit from the paragraph style and, ultimately, from the
/// document defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Font name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,
}

impl TextStyle {
    /// Check if any direct formatting is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.font_name.is_some() || self.font_size.is_some()
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Heading level (0 = title, 1-6) or None for a body paragraph
    pub heading_level: Option<u8>,

    /// Text alignment
    pub alignment: Alignment,

    /// Rendered as a bulleted list item
    pub bullet: bool,

    /// Left indent in points
    pub left_indent: Option<f32>,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Value of the `w:jc` attribute.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_run(TextRun::bold("world"));
        p.add_text("!");

        assert_eq!(p.plain_text(), "Hello world!");
        assert!(p.runs[1].style.bold);
    }

    #[test]
    fn test_heading() {
        let h1 = Paragraph::heading("Title", 1);
        assert!(h1.is_heading());
        assert_eq!(h1.heading_level(), Some(1));

        let title = Paragraph::heading("Doc", 0);
        assert_eq!(title.heading_level(), Some(0));

        let clamped = Paragraph::heading("Deep", 9);
        assert_eq!(clamped.heading_level(), Some(6));
    }

    #[test]
    fn test_set_text_replaces_runs() {
        let mut p = Paragraph::with_text("a");
        p.add_run(TextRun::bold("b"));
        p.set_text("c");

        assert_eq!(p.runs.len(), 1);
        assert_eq!(p.plain_text(), "c");
        assert!(!p.runs[0].style.bold);
    }

    #[test]
    fn test_empty_paragraph() {
        assert!(Paragraph::new().is_empty());
        assert!(Paragraph::with_text("").is_empty());
        assert!(!Paragraph::with_text(" x").is_empty());
    }

    #[test]
    fn test_text_style() {
        let mut run = TextRun::new("x");
        assert!(!run.style.has_styling());

        run.set_font_size(10.0);
        assert!(run.style.has_styling());
        assert_eq!(run.style.font_size, Some(10.0));
    }

    #[test]
    fn test_paragraph_builders() {
        let p = Paragraph::bullet("item").indent(36.0).align(Alignment::Center);
        assert!(p.style.bullet);
        assert_eq!(p.style.left_indent, Some(36.0));
        assert_eq!(p.style.alignment.as_ooxml(), "center");
        assert_eq!(Alignment::Justify.as_ooxml(), "both");
    }
}
