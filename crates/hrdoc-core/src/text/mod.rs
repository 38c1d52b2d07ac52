//! Text extraction from uploaded files.

mod docx;
mod pdf;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

use std::path::Path;

use tracing::debug;

use crate::error::TextError;
use crate::models::config::TextConfig;

/// Result type for text extraction.
pub type Result<T> = std::result::Result<T, TextError>;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Docx,
    PlainText,
}

impl SourceFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" => Ok(Self::PlainText),
            other => Err(TextError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_extension(extension)
    }
}

/// Trait for file-format text readers.
pub trait TextReader {
    /// Pull the text layer out of the raw file bytes.
    fn read_text(&self, data: &[u8]) -> Result<String>;
}

/// Reader for plain UTF-8 text; invalid sequences are replaced.
pub struct PlainTextReader;

impl TextReader for PlainTextReader {
    fn read_text(&self, data: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}

/// Extract text from in-memory file bytes of a known format.
pub fn extract_text_from_bytes(format: SourceFormat, data: &[u8]) -> Result<String> {
    let text = match format {
        SourceFormat::Pdf => PdfExtractor::new().read_text(data)?,
        SourceFormat::Docx => DocxExtractor::new().read_text(data)?,
        SourceFormat::PlainText => PlainTextReader.read_text(data)?,
    };
    debug!("Extracted {} characters of text from {:?}", text.len(), format);
    Ok(text)
}

/// Read a file from disk and extract its text.
pub fn extract_text_from_path(path: &Path, config: &TextConfig) -> crate::Result<String> {
    let format = SourceFormat::from_path(path)?;

    let size = std::fs::metadata(path)?.len();
    if config.max_file_bytes > 0 && size > config.max_file_bytes {
        return Err(TextError::TooLarge {
            size,
            limit: config.max_file_bytes,
        }
        .into());
    }

    let data = std::fs::read(path)?;
    Ok(extract_text_from_bytes(format, &data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_extension("PDF").unwrap(), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_extension("docx").unwrap(), SourceFormat::Docx);
        assert_eq!(SourceFormat::from_extension("txt").unwrap(), SourceFormat::PlainText);
        assert!(matches!(
            SourceFormat::from_extension("png"),
            Err(TextError::UnsupportedFormat(ext)) if ext == "png"
        ));
    }

    #[test]
    fn test_plain_text_lossy() {
        let text = extract_text_from_bytes(SourceFormat::PlainText, b"Name: A\xffB").unwrap();
        assert_eq!(text, "Name: A\u{fffd}B");
    }

    #[test]
    fn test_extract_from_path() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Ravi Kumar\nravi@example.com").unwrap();

        let text = extract_text_from_path(file.path(), &TextConfig::default()).unwrap();
        assert_eq!(text, "Ravi Kumar\nravi@example.com");
    }

    #[test]
    fn test_size_limit() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "0123456789").unwrap();

        let config = TextConfig { max_file_bytes: 4 };
        let err = extract_text_from_path(file.path(), &config).unwrap_err();
        assert!(matches!(
            err,
            crate::HrdocError::Text(TextError::TooLarge { size: 10, limit: 4 })
        ));
    }
}
