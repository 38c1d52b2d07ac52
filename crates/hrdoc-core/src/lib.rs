//! Core library for HR document processing.
//!
//! This crate provides:
//! - Text extraction from uploaded PDF, DOCX and plain-text files
//! - Regex-based field extraction for resumes, national-ID and tax-ID cards
//! - Completeness-based confidence scoring
//! - A processing pipeline that tries an external text-completion service
//!   first and falls back to the regex extractor

pub mod error;
pub mod extract;
pub mod models;
pub mod processor;
pub mod text;

pub use error::{CompletionError, HrdocError, Result, TextError};
pub use extract::{compute_confidence, extract};
pub use models::config::HrdocConfig;
pub use models::document::{
    DocumentStatus, DocumentType, ExtractedFields, ExtractionMethod, ExtractionResult,
    NationalIdFields, ProcessedDocument, ResumeFields, TaxIdFields,
};
pub use processor::{build_prompt, DocumentProcessor, TextCompletion};
pub use text::{extract_text_from_bytes, extract_text_from_path, SourceFormat};
