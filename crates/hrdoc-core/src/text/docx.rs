//! DOCX text extraction using zip and quick-xml.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::trace;
use zip::ZipArchive;

use super::{Result, TextReader};
use crate::error::TextError;

/// Extracts paragraph text from a Word document.
///
/// Text runs (`<w:t>`) are concatenated and each paragraph (`<w:p>`) ends a
/// line.
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(&self, data: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| TextError::Docx(format!("failed to open archive: {}", e)))?;

        let mut file = archive
            .by_name("word/document.xml")
            .map_err(|e| TextError::Docx(format!("missing word/document.xml: {}", e)))?;

        let mut xml = String::new();
        file.read_to_string(&mut xml)
            .map_err(|e| TextError::Docx(format!("failed to read document.xml: {}", e)))?;
        Ok(xml)
    }

    fn collect_paragraphs(&self, xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut text = String::new();
        let mut in_text = false;
        let mut paragraphs = 0usize;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    if e.local_name().as_ref() == b"t" {
                        in_text = true;
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" => {
                        text.push('\n');
                        paragraphs += 1;
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"p" => {
                        text.push('\n');
                        paragraphs += 1;
                    }
                    b"tab" => text.push('\t'),
                    b"br" | b"cr" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if in_text {
                        let run = e
                            .unescape()
                            .map_err(|e| TextError::Docx(format!("bad text run: {}", e)))?;
                        text.push_str(&run);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(TextError::Docx(format!("XML parse error: {}", e))),
                _ => {}
            }
            buf.clear();
        }

        trace!("Read {} paragraphs from DOCX body", paragraphs);

        let trimmed_len = text.trim_end_matches('\n').len();
        text.truncate(trimmed_len);
        Ok(text)
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextReader for DocxExtractor {
    fn read_text(&self, data: &[u8]) -> Result<String> {
        let xml = self.read_document_xml(data)?;
        self.collect_paragraphs(&xml)
    }
}
