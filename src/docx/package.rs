//! Package-level parts: content types, relationships and properties.

use crate::model::Metadata;

use super::xml::{escape, DECLARATION};

pub(crate) const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub(crate) const ROOT_RELS_PATH: &str = "_rels/.rels";
pub(crate) const DOCUMENT_PATH: &str = "word/document.xml";
pub(crate) const DOCUMENT_RELS_PATH: &str = "word/_rels/document.xml.rels";
pub(crate) const STYLES_PATH: &str = "word/styles.xml";
pub(crate) const NUMBERING_PATH: &str = "word/numbering.xml";
pub(crate) const CORE_PATH: &str = "docProps/core.xml";
pub(crate) const APP_PATH: &str = "docProps/app.xml";

const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub(crate) fn content_types_xml() -> String {
    let mut out = String::from(DECLARATION);
    out.push_str(
        "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>",
    );
    let overrides = [
        (
            DOCUMENT_PATH,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            STYLES_PATH,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            NUMBERING_PATH,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
        ),
        (
            CORE_PATH,
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            APP_PATH,
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];
    for (part, content_type) in overrides {
        out.push_str(&format!(
            "<Override PartName=\"/{}\" ContentType=\"{}\"/>",
            part, content_type
        ));
    }
    out.push_str("</Types>");
    out
}

pub(crate) fn root_rels_xml() -> String {
    let office_document = format!("{}/officeDocument", REL_BASE);
    let extended = format!("{}/extended-properties", REL_BASE);
    relationships(&[
        ("rId1", office_document.as_str(), DOCUMENT_PATH),
        (
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            CORE_PATH,
        ),
        ("rId3", extended.as_str(), APP_PATH),
    ])
}

pub(crate) fn document_rels_xml() -> String {
    let styles = format!("{}/styles", REL_BASE);
    let numbering = format!("{}/numbering", REL_BASE);
    relationships(&[
        ("rId1", styles.as_str(), "styles.xml"),
        ("rId2", numbering.as_str(), "numbering.xml"),
    ])
}

pub(crate) fn core_xml(metadata: &Metadata) -> String {
    let mut out = String::from(DECLARATION);
    out.push_str(
        "<cp:coreProperties \
         xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
         xmlns:dcterms=\"http://purl.org/dc/terms/\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
    );

    let fields = [
        ("dc:title", &metadata.title),
        ("dc:subject", &metadata.subject),
        ("dc:creator", &metadata.author),
        ("cp:keywords", &metadata.keywords),
    ];
    for (tag, value) in fields {
        if let Some(value) = value {
            out.push_str(&format!("<{0}>{1}</{0}>", tag, escape(value)));
        }
    }

    if let Some(created) = metadata.created {
        out.push_str(&format!(
            "<dcterms:created xsi:type=\"dcterms:W3CDTF\">{}</dcterms:created>",
            created.format("%Y-%m-%dT%H:%M:%SZ")
        ));
    }

    out.push_str("</cp:coreProperties>");
    out
}

pub(crate) fn app_xml() -> String {
    let mut out = String::from(DECLARATION);
    out.push_str(&format!(
        "<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\
         <Application>tabdoc {}</Application></Properties>",
        env!("CARGO_PKG_VERSION")
    ));
    out
}

fn relationships(entries: &[(&str, &str, &str)]) -> String {
    let mut out = String::from(DECLARATION);
    out.push_str(
        "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    );
    for (id, rel_type, target) in entries {
        out.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
            id, rel_type, target
        ));
    }
    out.push_str("</Relationships>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_content_types_cover_parts() {
        let xml = content_types_xml();
        for part in [DOCUMENT_PATH, STYLES_PATH, NUMBERING_PATH, CORE_PATH, APP_PATH] {
            assert!(xml.contains(&format!("PartName=\"/{}\"", part)), "{}", part);
        }
    }

    #[test]
    fn test_rels() {
        assert!(root_rels_xml().contains("Target=\"word/document.xml\""));
        assert!(document_rels_xml().contains("Target=\"numbering.xml\""));
    }

    #[test]
    fn test_core_properties() {
        let mut metadata = Metadata::with_title("Specs & Notes");
        metadata.created = Some(Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap());

        let xml = core_xml(&metadata);
        assert!(xml.contains("<dc:title>Specs &amp; Notes</dc:title>"));
        assert!(!xml.contains("dc:creator"));
        assert!(xml.contains(">2025-03-01T08:30:00Z</dcterms:created>"));
    }
}
