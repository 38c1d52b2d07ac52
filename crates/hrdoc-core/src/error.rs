//! Error types for the hrdoc-core library.

use thiserror::Error;

/// Main error type for the hrdoc library.
#[derive(Error, Debug)]
pub enum HrdocError {
    /// Text extraction error.
    #[error("text extraction error: {0}")]
    Text(#[from] TextError),

    /// Primary extraction backend error.
    #[error("completion error: {0}")]
    Completion(#[from] CompletionError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to pulling text out of uploaded files.
#[derive(Error, Debug)]
pub enum TextError {
    /// The file extension is not one of the supported formats.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The file exceeds the configured size limit.
    #[error("file is too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Failed to read the DOCX archive or its XML body.
    #[error("failed to parse DOCX: {0}")]
    Docx(String),
}

/// Errors returned by a primary extraction backend.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The service could not be reached.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The service did not answer in time.
    #[error("request timed out")]
    Timeout,

    /// The service answered with an error status.
    #[error("service returned status {0}")]
    Status(u16),
}

/// Result type for the hrdoc library.
pub type Result<T> = std::result::Result<T, HrdocError>;
