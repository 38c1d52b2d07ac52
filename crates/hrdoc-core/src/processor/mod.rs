//! Document processing pipeline.
//!
//! A [`DocumentProcessor`] pulls text out of an uploaded file, asks the
//! optional completion backend for a JSON record and falls back to the regex
//! extractor whenever that backend is missing, fails or answers with
//! something other than a JSON object.

mod prompts;

pub use prompts::{build_prompt, build_prompt_with_limit, DEFAULT_PROMPT_TEXT_CHARS};

use std::path::Path;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::CompletionError;
use crate::extract::{compute_confidence, extract};
use crate::models::config::HrdocConfig;
use crate::models::document::{DocumentStatus, DocumentType, ExtractionMethod, ProcessedDocument};
use crate::text::extract_text_from_path;
use crate::Result;

use prompts::truncate_chars;

/// Message recorded when a document yields too little text to work with.
pub const INSUFFICIENT_TEXT: &str = "Could not extract sufficient text from document";

/// Backend for the primary extraction path.
///
/// Implementations send the prompt to a text-completion service and return
/// its raw reply. Transport, model choice and timeouts are up to the caller.
pub trait TextCompletion {
    fn complete(&self, prompt: &str) -> std::result::Result<String, CompletionError>;
}

/// Processes documents into field records.
pub struct DocumentProcessor {
    config: HrdocConfig,
    completion: Option<Box<dyn TextCompletion + Send + Sync>>,
}

impl DocumentProcessor {
    /// Create a processor that only uses the regex fallback.
    pub fn new(config: HrdocConfig) -> Self {
        Self {
            config,
            completion: None,
        }
    }

    /// Use `backend` for the primary extraction path.
    pub fn with_completion(mut self, backend: impl TextCompletion + Send + Sync + 'static) -> Self {
        self.completion = Some(Box::new(backend));
        self
    }

    pub fn config(&self) -> &HrdocConfig {
        &self.config
    }

    /// Read a file from disk and process its text.
    pub fn process_file(&self, path: &Path, document_type: DocumentType) -> Result<ProcessedDocument> {
        info!("Processing document: {}, type: {}", path.display(), document_type);
        let text = extract_text_from_path(path, &self.config.text)?;
        Ok(self.process_text(&text, document_type))
    }

    /// Process already-extracted document text.
    pub fn process_text(&self, text: &str, document_type: DocumentType) -> ProcessedDocument {
        let processing = &self.config.processing;

        if text.trim().chars().count() < processing.min_text_chars {
            warn!("Insufficient text extracted from document");
            return ProcessedDocument::failed(document_type, INSUFFICIENT_TEXT);
        }

        let (data, method) = match self.try_primary(text, document_type) {
            Some(data) => (data, ExtractionMethod::Llm),
            None => (extract(text, document_type).to_map(), ExtractionMethod::RegexFallback),
        };

        let confidence_score = compute_confidence(&data, document_type);
        debug!(
            "Extracted {} fields via {} (confidence {:.1})",
            data.len(),
            method.as_str(),
            confidence_score
        );

        let status = if data.is_empty() {
            DocumentStatus::Failed
        } else {
            DocumentStatus::Completed
        };

        ProcessedDocument {
            document_type,
            status,
            extracted_text: truncate_chars(text, processing.stored_text_chars).to_string(),
            extracted_data: data,
            confidence_score,
            processing_method: method,
            error: None,
            processed_at: Utc::now(),
        }
    }

    /// Run the completion backend; `None` means the fallback should be used.
    fn try_primary(&self, text: &str, document_type: DocumentType) -> Option<Map<String, Value>> {
        let backend = self.completion.as_ref()?;
        let prompt =
            build_prompt_with_limit(text, document_type, self.config.processing.prompt_text_chars);

        let reply = match backend.complete(&prompt) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Completion backend failed, using regex fallback: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Value>(reply.trim()) {
            Ok(Value::Object(map)) => {
                info!("Successfully extracted data with completion backend");
                Some(map)
            }
            Ok(other) => {
                warn!(
                    "Completion reply is JSON but not an object ({}), using regex fallback",
                    json_kind(&other)
                );
                None
            }
            Err(e) => {
                warn!("Failed to parse completion reply as JSON, using regex fallback: {}", e);
                debug!("Raw reply: {}", reply);
                None
            }
        }
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new(HrdocConfig::default())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
