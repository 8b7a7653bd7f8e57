//! `word/styles.xml` and `word/numbering.xml` generation.

use std::collections::{BTreeSet, HashSet};

use crate::builder::DEFAULT_TABLE_STYLE;
use crate::model::{Document, DocumentDefaults};

use super::body::heading_style;
use super::xml::{escape, half_points, style_id, DECLARATION, NS_W};

/// Heading sizes in points, index 0 being the title.
const HEADING_SIZES: [f32; 7] = [28.0, 16.0, 13.0, 12.0, 11.0, 11.0, 11.0];

const HEADING_COLOR: &str = "2F5496";

/// Fallback base for table style names with no ASCII letters or digits.
const FALLBACK_TABLE_STYLE_ID: &str = "TableStyle";

/// Unique style IDs for the table styles used by a document.
///
/// IDs are derived from display names, so distinct names can collide
/// ("Table Grid" and "TableGrid") or come out empty ("表格"). Colliding IDs
/// get a numeric suffix and empty ones a fallback base. "Table Grid" is
/// assigned first and always keeps `TableGrid`.
#[derive(Debug, Clone)]
pub(crate) struct TableStyleIds {
    entries: Vec<(String, String)>,
}

impl TableStyleIds {
    /// Assign IDs to every table style name used in `doc`.
    pub(crate) fn for_document(doc: &Document) -> Self {
        let mut names: BTreeSet<&str> = doc
            .tables()
            .filter_map(|t| t.style.as_deref())
            .collect();
        names.remove(DEFAULT_TABLE_STYLE);

        let mut taken: HashSet<String> = (0..HEADING_SIZES.len() as u8)
            .map(heading_style)
            .chain(["Normal", "ListBullet", "TableNormal"].map(String::from))
            .collect();

        let mut entries = Vec::with_capacity(names.len() + 1);
        for name in std::iter::once(DEFAULT_TABLE_STYLE).chain(names) {
            let base = match style_id(name) {
                id if id.is_empty() => FALLBACK_TABLE_STYLE_ID.to_string(),
                id => id,
            };
            let mut id = base.clone();
            let mut suffix = 2;
            while !taken.insert(id.clone()) {
                id = format!("{}{}", base, suffix);
                suffix += 1;
            }
            if id != base {
                log::debug!("Table style {:?} assigned ID {}", name, id);
            }
            entries.push((name.to_string(), id));
        }

        Self { entries }
    }

    /// Style ID for a display name.
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| id.as_str())
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, id)| (n.as_str(), id.as_str()))
    }
}

/// Render the style definitions part.
///
/// Every table style name used in `doc` gets a definition; "Table Grid"
/// always exists and carries single borders on all six edges.
pub(crate) fn styles_xml(doc: &Document) -> String {
    let defaults = &doc.defaults;
    let mut out = String::with_capacity(4096);
    out.push_str(DECLARATION);
    out.push_str(&format!("<w:styles xmlns:w=\"{}\">", NS_W));

    out.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    out.push_str(&font_props(defaults));
    out.push_str("<w:lang w:val=\"en-US\"/></w:rPr></w:rPrDefault>");
    out.push_str(
        "<w:pPrDefault><w:pPr><w:spacing w:after=\"160\" w:line=\"259\" \
         w:lineRule=\"auto\"/></w:pPr></w:pPrDefault></w:docDefaults>",
    );

    out.push_str(
        "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">\
         <w:name w:val=\"Normal\"/><w:qFormat/><w:rPr>",
    );
    out.push_str(&font_props(defaults));
    out.push_str("</w:rPr></w:style>");

    for (level, size) in HEADING_SIZES.iter().enumerate() {
        write_heading_style(&mut out, level as u8, *size);
    }

    out.push_str(
        "<w:style w:type=\"paragraph\" w:styleId=\"ListBullet\">\
         <w:name w:val=\"List Bullet\"/><w:basedOn w:val=\"Normal\"/>\
         <w:pPr><w:numPr><w:numId w:val=\"1\"/></w:numPr>\
         <w:ind w:left=\"360\" w:hanging=\"360\"/><w:contextualSpacing/></w:pPr></w:style>",
    );

    out.push_str(
        "<w:style w:type=\"table\" w:default=\"1\" w:styleId=\"TableNormal\">\
         <w:name w:val=\"Normal Table\"/><w:uiPriority w:val=\"99\"/><w:semiHidden/>\
         <w:tblPr><w:tblInd w:w=\"0\" w:type=\"dxa\"/><w:tblCellMar>\
         <w:top w:w=\"0\" w:type=\"dxa\"/><w:left w:w=\"108\" w:type=\"dxa\"/>\
         <w:bottom w:w=\"0\" w:type=\"dxa\"/><w:right w:w=\"108\" w:type=\"dxa\"/>\
         </w:tblCellMar></w:tblPr></w:style>",
    );

    for (name, id) in TableStyleIds::for_document(doc).iter() {
        write_table_style(&mut out, name, id);
    }

    out.push_str("</w:styles>");
    out
}

/// Render the numbering part backing the `ListBullet` style.
pub(crate) fn numbering_xml() -> String {
    let mut out = String::new();
    out.push_str(DECLARATION);
    out.push_str(&format!("<w:numbering xmlns:w=\"{}\">", NS_W));
    out.push_str(
        "<w:abstractNum w:abstractNumId=\"0\"><w:multiLevelType w:val=\"singleLevel\"/>\
         <w:lvl w:ilvl=\"0\"><w:start w:val=\"1\"/><w:numFmt w:val=\"bullet\"/>\
         <w:pStyle w:val=\"ListBullet\"/><w:lvlText w:val=\"\u{2022}\"/><w:lvlJc w:val=\"left\"/>\
         <w:pPr><w:ind w:left=\"360\" w:hanging=\"360\"/></w:pPr>\
         <w:rPr><w:rFonts w:ascii=\"Symbol\" w:hAnsi=\"Symbol\" w:hint=\"default\"/></w:rPr>\
         </w:lvl></w:abstractNum>",
    );
    out.push_str("<w:num w:numId=\"1\"><w:abstractNumId w:val=\"0\"/></w:num>");
    out.push_str("</w:numbering>");
    out
}

fn font_props(defaults: &DocumentDefaults) -> String {
    let font = escape(&defaults.font_name);
    let size = half_points(defaults.font_size);
    format!(
        "<w:rFonts w:ascii=\"{0}\" w:eastAsia=\"{0}\" w:hAnsi=\"{0}\" w:cs=\"{0}\"/>\
         <w:sz w:val=\"{1}\"/><w:szCs w:val=\"{1}\"/>",
        font, size
    )
}

fn write_heading_style(out: &mut String, level: u8, size: f32) {
    let id = heading_style(level);
    let name = if level == 0 {
        "Title".to_string()
    } else {
        format!("heading {}", level)
    };
    let outline = if level == 0 {
        String::new()
    } else {
        format!("<w:outlineLvl w:val=\"{}\"/>", level - 1)
    };
    out.push_str(&format!(
        "<w:style w:type=\"paragraph\" w:styleId=\"{id}\"><w:name w:val=\"{name}\"/>\
         <w:basedOn w:val=\"Normal\"/><w:next w:val=\"Normal\"/><w:qFormat/>\
         <w:pPr><w:keepNext/><w:spacing w:before=\"240\" w:after=\"80\"/>{outline}</w:pPr>\
         <w:rPr><w:b/><w:bCs/><w:color w:val=\"{color}\"/>\
         <w:sz w:val=\"{hp}\"/><w:szCs w:val=\"{hp}\"/></w:rPr></w:style>",
        id = id,
        name = name,
        outline = outline,
        color = HEADING_COLOR,
        hp = half_points(size),
    ));
}

fn write_table_style(out: &mut String, name: &str, id: &str) {
    out.push_str(&format!(
        "<w:style w:type=\"table\" w:styleId=\"{}\"><w:name w:val=\"{}\"/>\
         <w:basedOn w:val=\"TableNormal\"/><w:uiPriority w:val=\"39\"/>\
         <w:pPr><w:spacing w:after=\"0\" w:line=\"240\" w:lineRule=\"auto\"/></w:pPr><w:tblPr>",
        id,
        escape(name)
    ));
    if name == DEFAULT_TABLE_STYLE {
        out.push_str("<w:tblBorders>");
        for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            out.push_str(&format!(
                "<w:{} w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
                edge
            ));
        }
        out.push_str("</w:tblBorders>");
    }
    out.push_str("</w:tblPr></w:style>");
}
