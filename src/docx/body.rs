//! `word/document.xml` generation.

use crate::model::{Block, BorderEdge, Document, Paragraph, Table, TableBorders, TextRun};

use super::styles::TableStyleIds;
use super::xml::{escape, half_points, twips, DECLARATION, NS_R, NS_W};

/// Usable text width of a Letter page with 1" margins, in twips.
const TEXT_WIDTH: u32 = 9360;

/// Render the main document part.
pub(crate) fn document_xml(doc: &Document) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(DECLARATION);
    out.push_str(&format!(
        "<w:document xmlns:w=\"{}\" xmlns:r=\"{}\"><w:body>",
        NS_W, NS_R
    ));

    let style_ids = TableStyleIds::for_document(doc);
    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => write_paragraph(&mut out, p),
            Block::Table(t) => write_table(&mut out, t, &style_ids),
            Block::PageBreak => out.push_str("<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>"),
        }
    }

    out.push_str(
        "<w:sectPr><w:pgSz w:w=\"12240\" w:h=\"15840\"/>\
         <w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\" \
         w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/></w:sectPr>",
    );
    out.push_str("</w:body></w:document>");
    out
}

/// Paragraph style ID for a heading level.
pub(crate) fn heading_style(level: u8) -> String {
    if level == 0 {
        "Title".to_string()
    } else {
        format!("Heading{}", level)
    }
}

fn write_paragraph(out: &mut String, para: &Paragraph) {
    out.push_str("<w:p>");

    let style = &para.style;
    let style_name = match style.heading_level {
        Some(level) => Some(heading_style(level)),
        None if style.bullet => Some("ListBullet".to_string()),
        None => None,
    };
    let has_props = style_name.is_some()
        || style.left_indent.is_some()
        || style.alignment != Default::default();

    if has_props {
        out.push_str("<w:pPr>");
        if let Some(name) = style_name {
            out.push_str(&format!("<w:pStyle w:val=\"{}\"/>", name));
        }
        if let Some(indent) = style.left_indent {
            out.push_str(&format!("<w:ind w:left=\"{}\"/>", twips(indent)));
        }
        if style.alignment != Default::default() {
            out.push_str(&format!("<w:jc w:val=\"{}\"/>", style.alignment.as_ooxml()));
        }
        out.push_str("</w:pPr>");
    }

    for run in &para.runs {
        write_run(out, run);
    }

    out.push_str("</w:p>");
}

fn write_run(out: &mut String, run: &TextRun) {
    out.push_str("<w:r>");

    let style = &run.style;
    if style.has_styling() {
        out.push_str("<w:rPr>");
        if let Some(ref font) = style.font_name {
            let font = escape(font);
            out.push_str(&format!(
                "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:cs=\"{0}\"/>",
                font
            ));
        }
        if style.bold {
            out.push_str("<w:b/><w:bCs/>");
        }
        if style.italic {
            out.push_str("<w:i/><w:iCs/>");
        }
        if let Some(size) = style.font_size {
            let hp = half_points(size);
            out.push_str(&format!("<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>", hp));
        }
        out.push_str("</w:rPr>");
    }

    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<w:br/>");
        }
        if !line.is_empty() {
            out.push_str("<w:t xml:space=\"preserve\">");
            out.push_str(&escape(line));
            out.push_str("</w:t>");
        }
    }

    out.push_str("</w:r>");
}

fn write_table(out: &mut String, table: &Table, style_ids: &TableStyleIds) {
    let columns = table.column_count().max(1);
    let col_width = TEXT_WIDTH / columns as u32;

    out.push_str("<w:tbl><w:tblPr>");
    if let Some(id) = table.style.as_deref().and_then(|name| style_ids.get(name)) {
        out.push_str(&format!("<w:tblStyle w:val=\"{}\"/>", id));
    }
    out.push_str("<w:tblW w:w=\"0\" w:type=\"auto\"/>");
    write_borders(out, &table.borders);
    out.push_str(
        "<w:tblLook w:val=\"04A0\" w:firstRow=\"1\" w:lastRow=\"0\" \
         w:firstColumn=\"1\" w:lastColumn=\"0\" w:noHBand=\"0\" w:noVBand=\"1\"/>",
    );
    out.push_str("</w:tblPr><w:tblGrid>");
    for _ in 0..columns {
        out.push_str(&format!("<w:gridCol w:w=\"{}\"/>", col_width));
    }
    out.push_str("</w:tblGrid>");

    for row in &table.rows {
        out.push_str("<w:tr>");
        for cell in &row.cells {
            out.push_str(&format!(
                "<w:tc><w:tcPr><w:tcW w:w=\"{}\" w:type=\"dxa\"/></w:tcPr>",
                col_width
            ));
            if cell.paragraphs.is_empty() {
                // A cell must end with a paragraph
                out.push_str("<w:p/>");
            }
            for para in &cell.paragraphs {
                write_paragraph(out, para);
            }
            out.push_str("</w:tc>");
        }
        out.push_str("</w:tr>");
    }

    out.push_str("</w:tbl>");
}

fn write_borders(out: &mut String, borders: &TableBorders) {
    if borders.is_empty() {
        return;
    }
    out.push_str("<w:tblBorders>");
    for edge in BorderEdge::ALL {
        if let Some(value) = borders.get(edge) {
            out.push_str(&format!(
                "<w:{} w:val=\"{}\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
                edge.as_ooxml(),
                value.as_ooxml()
            ));
        }
    }
    out.push_str("</w:tblBorders>");
}
