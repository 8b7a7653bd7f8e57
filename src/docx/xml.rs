//! Small helpers for emitting WordprocessingML by hand.

/// XML declaration prepended to every part.
pub(crate) const DECLARATION: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Main WordprocessingML namespace.
pub(crate) const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace.
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Escape text for use in element content or attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            // Control characters other than tab/newline are not allowed in XML 1.0
            c if (c as u32) < 0x20 && c != '\t' && c != '\n' && c != '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Convert points to half-points (`w:sz`).
pub(crate) fn half_points(points: f32) -> u32 {
    (points * 2.0).round().max(1.0) as u32
}

/// Convert points to twentieths of a point (`dxa`).
pub(crate) fn twips(points: f32) -> i32 {
    (points * 20.0).round() as i32
}

/// Derive a style ID from a display name ("Table Grid" -> "TableGrid").
pub(crate) fn style_id(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("Enum: ['student',...]"), "Enum: [&apos;student&apos;,...]");
        assert_eq!(escape("e.g., \"101B\""), "e.g., &quot;101B&quot;");
        assert_eq!(escape("bell\u{7}"), "bell");
    }

    #[test]
    fn test_units() {
        assert_eq!(half_points(10.0), 20);
        assert_eq!(half_points(10.5), 21);
        assert_eq!(twips(36.0), 720);
    }

    #[test]
    fn test_style_id() {
        assert_eq!(style_id("Table Grid"), "TableGrid");
        assert_eq!(style_id("List Bullet"), "ListBullet");
    }
}
