//! DOCX (Office Open XML) serialization.
//!
//! A `.docx` file is a ZIP package of XML parts. [`DocxWriter`] renders a
//! [`Document`] into the minimal set of parts Word and LibreOffice need:
//! the main body, styles (carrying the document defaults), bullet
//! numbering, relationships and core properties.

mod body;
mod package;
mod styles;
mod xml;

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::model::Document;

use package::{
    APP_PATH, CONTENT_TYPES_PATH, CORE_PATH, DOCUMENT_PATH, DOCUMENT_RELS_PATH, NUMBERING_PATH,
    ROOT_RELS_PATH, STYLES_PATH,
};

/// Serialize a document to `.docx` bytes.
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>> {
    let cursor = DocxWriter::new().write_to(doc, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Write a document to a `.docx` file, replacing any existing file.
///
/// The file handle is closed when this function returns, whether or not
/// writing succeeded.
pub fn write_file<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    DocxWriter::new().write_to(doc, file)?;
    log::debug!("Saved document to {}", path.display());
    Ok(())
}

/// Writer for `.docx` packages.
#[derive(Debug, Clone, Copy)]
pub struct DocxWriter {
    compression: CompressionMethod,
}

impl DocxWriter {
    /// Create a writer using deflate compression.
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Store parts uncompressed.
    pub fn stored(mut self) -> Self {
        self.compression = CompressionMethod::Stored;
        self
    }

    /// Write the package into `writer` and hand the writer back.
    pub fn write_to<W: Write + Seek>(&self, doc: &Document, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default().compression_method(self.compression);

        let parts = [
            (CONTENT_TYPES_PATH, package::content_types_xml()),
            (ROOT_RELS_PATH, package::root_rels_xml()),
            (DOCUMENT_PATH, body::document_xml(doc)),
            (DOCUMENT_RELS_PATH, package::document_rels_xml()),
            (STYLES_PATH, styles::styles_xml(doc)),
            (NUMBERING_PATH, styles::numbering_xml()),
            (CORE_PATH, package::core_xml(&doc.metadata)),
            (APP_PATH, package::app_xml()),
        ];

        for (name, content) in parts {
            zip.start_file(name, options)?;
            zip.write_all(content.as_bytes())?;
            log::trace!("Wrote part {} ({} bytes)", name, content.len());
        }

        let writer = zip.finish()?;
        log::debug!(
            "Packaged document: {} blocks, {} tables",
            doc.block_count(),
            doc.tables().count()
        );
        Ok(writer)
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}
