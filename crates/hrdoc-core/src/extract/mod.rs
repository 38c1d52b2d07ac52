//! Regex fallback extraction of document fields.
//!
//! [`extract`] maps raw text and a [`DocumentType`] to a schema-shaped
//! [`ExtractionResult`]. It never fails: a field whose rules all miss keeps
//! its default (empty string, empty list or `0.0`).

mod confidence;
mod national_id;
mod resume;
pub mod rules;
mod tax_id;

pub use confidence::compute_confidence;
pub use national_id::extract_national_id;
pub use resume::{extract_resume, SKILL_VOCABULARY};
pub use tax_id::extract_tax_id;

use std::borrow::Cow;

use tracing::debug;

use crate::models::document::{DocumentType, ExtractedFields, ExtractionResult};

/// Extract fields from `text` using the rules for `document_type`.
///
/// Pure: the same input always yields the same result. Generic documents
/// get their text back untouched under the `text` key.
pub fn extract(text: &str, document_type: DocumentType) -> ExtractionResult {
    let normalized = normalize_line_endings(text);
    let fields = match document_type {
        DocumentType::Resume => ExtractedFields::Resume(extract_resume(&normalized)),
        DocumentType::NationalId => ExtractedFields::NationalId(extract_national_id(&normalized)),
        DocumentType::TaxId => ExtractedFields::TaxId(extract_tax_id(&normalized)),
        DocumentType::Generic => ExtractedFields::Passthrough {
            text: text.to_string(),
        },
    };

    let result = ExtractionResult::new(fields);
    debug!(
        "Regex fallback for {}: {} fields populated",
        document_type,
        populated_fields(&result)
    );
    result
}

impl ExtractionResult {
    /// Completeness score of this result in `[0, 100]`.
    pub fn confidence(&self) -> f64 {
        compute_confidence(&self.to_map(), self.document_type())
    }
}

/// CRLF and lone CR line endings become LF.
fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn populated_fields(result: &ExtractionResult) -> usize {
    let baseline = ExtractionResult::baseline(result.document_type()).to_map();
    result
        .to_map()
        .iter()
        .filter(|&(key, value)| baseline.get(key) != Some(value))
        .count()
}
