//! Document types, extracted field records and processing results.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of uploaded document, selecting the rule set and output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Candidate resume / CV.
    Resume,
    /// National identity card (Aadhaar).
    NationalId,
    /// Tax identity card (PAN).
    TaxId,
    /// Anything else; the text is passed through untouched.
    Generic,
}

impl DocumentType {
    /// Parse a document tag. Unknown tags map to [`DocumentType::Generic`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "resume" | "cv" => Self::Resume,
            "national_id" | "aadhaar" => Self::NationalId,
            "tax_id" | "pan" => Self::TaxId,
            _ => Self::Generic,
        }
    }

    /// Canonical tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::NationalId => "national_id",
            Self::TaxId => "tax_id",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which extraction path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Ordered regex rules, used when the primary path is unavailable.
    RegexFallback,
    /// External text-completion service.
    Llm,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegexFallback => "regex_fallback",
            Self::Llm => "llm",
        }
    }
}

/// Fields extracted from a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    /// Vocabulary skills found in the text, in vocabulary order.
    pub skills: Vec<String>,
    /// A single synthetic "N years of experience" entry, not per-job records.
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub total_experience_years: f64,
    pub summary: String,
}

/// Fields extracted from a national-ID (Aadhaar) card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalIdFields {
    /// 12 digits, separators removed.
    pub id_number: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub spouse_name: String,
    /// `Male`, `Female` or `Other`.
    pub gender: String,
    /// `DD-MM-YYYY`.
    pub date_of_birth: String,
    pub address: String,
    /// 6 digits.
    pub postal_code: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub enrollment_number: String,
    pub enrollment_date: String,
}

/// Fields extracted from a tax-ID (PAN) card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxIdFields {
    /// Five letters, four digits, one letter; upper-cased.
    pub id_number: String,
    pub name: String,
    pub father_name: String,
    pub date_of_birth: String,
    pub signature: String,
}

/// Schema-shaped record for one document type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractedFields {
    Resume(ResumeFields),
    NationalId(NationalIdFields),
    TaxId(TaxIdFields),
    /// Generic documents: the input text, unmodified.
    Passthrough { text: String },
}

impl ExtractedFields {
    /// All-defaults record for a document type.
    pub fn defaults(document_type: DocumentType) -> Self {
        match document_type {
            DocumentType::Resume => Self::Resume(ResumeFields::default()),
            DocumentType::NationalId => Self::NationalId(NationalIdFields::default()),
            DocumentType::TaxId => Self::TaxId(TaxIdFields::default()),
            DocumentType::Generic => Self::Passthrough {
                text: String::new(),
            },
        }
    }

    /// Document type this record belongs to.
    pub fn document_type(&self) -> DocumentType {
        match self {
            Self::Resume(_) => DocumentType::Resume,
            Self::NationalId(_) => DocumentType::NationalId,
            Self::TaxId(_) => DocumentType::TaxId,
            Self::Passthrough { .. } => DocumentType::Generic,
        }
    }
}

/// Output of the regex fallback extractor.
///
/// Serializes as a flat JSON object: the record's fields in schema order
/// followed by `"extraction_method": "regex_fallback"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    #[serde(flatten)]
    pub fields: ExtractedFields,
    pub extraction_method: ExtractionMethod,
}

impl ExtractionResult {
    pub fn new(fields: ExtractedFields) -> Self {
        Self {
            fields,
            extraction_method: ExtractionMethod::RegexFallback,
        }
    }

    /// The result produced for text in which no rule matches.
    pub fn baseline(document_type: DocumentType) -> Self {
        Self::new(ExtractedFields::defaults(document_type))
    }

    pub fn document_type(&self) -> DocumentType {
        self.fields.document_type()
    }

    pub fn as_resume(&self) -> Option<&ResumeFields> {
        match &self.fields {
            ExtractedFields::Resume(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_national_id(&self) -> Option<&NationalIdFields> {
        match &self.fields {
            ExtractedFields::NationalId(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_tax_id(&self) -> Option<&TaxIdFields> {
        match &self.fields {
            ExtractedFields::TaxId(fields) => Some(fields),
            _ => None,
        }
    }

    /// Field-name to value mapping, as handed to callers and the scorer.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Outcome of processing an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Completed,
    Failed,
}

/// A processed document as returned to the HR application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub document_type: DocumentType,

    pub status: DocumentStatus,

    /// Leading portion of the text pulled from the file.
    pub extracted_text: String,

    /// Extracted fields, from either path.
    pub extracted_data: Map<String, Value>,

    /// Completeness score in `[0, 100]`.
    pub confidence_score: f64,

    pub processing_method: ExtractionMethod,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub processed_at: DateTime<Utc>,
}

impl ProcessedDocument {
    /// A failed document carrying an error message and no data.
    pub fn failed(document_type: DocumentType, message: impl Into<String>) -> Self {
        Self {
            document_type,
            status: DocumentStatus::Failed,
            extracted_text: String::new(),
            extracted_data: Map::new(),
            confidence_score: 0.0,
            processing_method: ExtractionMethod::RegexFallback,
            error: Some(message.into()),
            processed_at: Utc::now(),
        }
    }

    /// String value of an extracted field, if present.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.extracted_data.get(name).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_type_tags() {
        assert_eq!(DocumentType::from_tag("resume"), DocumentType::Resume);
        assert_eq!(DocumentType::from_tag("Aadhaar"), DocumentType::NationalId);
        assert_eq!(DocumentType::from_tag("national_id"), DocumentType::NationalId);
        assert_eq!(DocumentType::from_tag("PAN"), DocumentType::TaxId);
        assert_eq!(DocumentType::from_tag("tax_id"), DocumentType::TaxId);
        assert_eq!(DocumentType::from_tag("passport"), DocumentType::Generic);
        assert_eq!(DocumentType::from_tag(""), DocumentType::Generic);
    }

    #[test]
    fn test_resume_map_keys() {
        let map = ExtractionResult::baseline(DocumentType::Resume).to_map();
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        let mut expected = vec![
            "city",
            "education",
            "email",
            "experience",
            "extraction_method",
            "name",
            "phone",
            "skills",
            "summary",
            "total_experience_years",
        ];
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_baseline_defaults() {
        let map = ExtractionResult::baseline(DocumentType::Resume).to_map();
        assert_eq!(map["name"], Value::String(String::new()));
        assert_eq!(map["skills"], Value::Array(vec![]));
        assert_eq!(map["total_experience_years"].as_f64(), Some(0.0));
        assert_eq!(map["extraction_method"], "regex_fallback");
    }

    #[test]
    fn test_passthrough_serialization() {
        let result = ExtractionResult::new(ExtractedFields::Passthrough {
            text: "hello".to_string(),
        });
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"text":"hello","extraction_method":"regex_fallback"}"#);
        assert_eq!(result.document_type(), DocumentType::Generic);
    }

    #[test]
    fn test_failed_document() {
        let doc = ProcessedDocument::failed(DocumentType::TaxId, "no text");
        assert_eq!(doc.status, DocumentStatus::Failed);
        assert_eq!(doc.confidence_score, 0.0);
        assert_eq!(doc.error.as_deref(), Some("no text"));
    }
}
