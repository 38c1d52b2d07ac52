//! Completeness scoring for extracted records.

use serde_json::{Map, Value};

use crate::models::document::DocumentType;

/// Share of the score carried by required fields.
const REQUIRED_WEIGHT: f64 = 60.0;
/// Share of the score carried by optional fields.
const OPTIONAL_WEIGHT: f64 = 40.0;
const MAX_SCORE: f64 = 100.0;

const RESUME_REQUIRED: &[&str] = &["name", "email", "phone"];
const RESUME_OPTIONAL: &[&str] = &["skills", "experience", "education", "city"];
const NATIONAL_ID_REQUIRED: &[&str] = &["id_number", "name"];
const NATIONAL_ID_OPTIONAL: &[&str] =
    &["father_name", "date_of_birth", "address", "gender", "postal_code"];
const TAX_ID_REQUIRED: &[&str] = &["id_number", "name"];
const TAX_ID_OPTIONAL: &[&str] = &["father_name", "date_of_birth", "signature"];

/// Required and optional field names for a document type.
fn field_sets(document_type: DocumentType) -> (&'static [&'static str], &'static [&'static str]) {
    match document_type {
        DocumentType::NationalId => (NATIONAL_ID_REQUIRED, NATIONAL_ID_OPTIONAL),
        DocumentType::TaxId => (TAX_ID_REQUIRED, TAX_ID_OPTIONAL),
        DocumentType::Resume | DocumentType::Generic => (RESUME_REQUIRED, RESUME_OPTIONAL),
    }
}

/// Whether a field value carries information.
fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::String(s) => s.chars().count() > 2,
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Bool(_) | Value::Null => false,
    }
}

fn weighted_hits(data: &Map<String, Value>, fields: &[&str], weight: f64) -> f64 {
    if fields.is_empty() {
        return 0.0;
    }
    let hits = fields
        .iter()
        .filter(|f| data.get(**f).is_some_and(is_meaningful))
        .count();
    hits as f64 * weight / fields.len() as f64
}

/// Score how complete an extracted record is, in `[0, 100]`.
///
/// Each meaningful required field adds an equal share of 60 points and each
/// meaningful optional field an equal share of 40. Records carrying an
/// `error` key, and empty records, score 0.
pub fn compute_confidence(data: &Map<String, Value>, document_type: DocumentType) -> f64 {
    if data.is_empty() || data.contains_key("error") {
        return 0.0;
    }

    let (required, optional) = field_sets(document_type);
    let score = weighted_hits(data, required, REQUIRED_WEIGHT)
        + weighted_hits(data, optional, OPTIONAL_WEIGHT);
    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_full_resume_scores_100() {
        let data = object(json!({
            "name": "Anita Desai",
            "email": "anita@example.com",
            "phone": "+91 98765 43210",
            "skills": ["Python"],
            "experience": ["5.0 years of experience"],
            "education": ["B.Tech"],
            "city": "Pune",
        }));
        assert_close(compute_confidence(&data, DocumentType::Resume), 100.0);
    }

    #[test]
    fn test_partial_national_id() {
        let data = object(json!({
            "id_number": "123456789012",
            "name": "",
            "gender": "Male",
            "address": "12 MG Road",
        }));
        // One of two required (30) and two of five optional (16).
        assert_close(compute_confidence(&data, DocumentType::NationalId), 46.0);
    }

    #[test]
    fn test_short_strings_do_not_count() {
        let data = object(json!({ "id_number": "AB", "name": "Raj" }));
        assert_close(compute_confidence(&data, DocumentType::TaxId), 30.0);
    }

    #[test]
    fn test_error_marker_scores_zero() {
        let data = object(json!({ "name": "Anita Desai", "error": "timeout" }));
        assert_eq!(compute_confidence(&data, DocumentType::Resume), 0.0);
        assert_eq!(compute_confidence(&Map::new(), DocumentType::Resume), 0.0);
    }

    #[test]
    fn test_value_kinds() {
        assert!(is_meaningful(&json!({ "company": "Acme" })));
        assert!(is_meaningful(&json!(2.5)));
        assert!(!is_meaningful(&json!(0.0)));
        assert!(!is_meaningful(&json!([])));
        assert!(!is_meaningful(&json!(null)));
        assert!(!is_meaningful(&json!(true)));
    }

    #[test]
    fn test_generic_uses_resume_fields() {
        let data = object(json!({ "name": "Anita Desai", "email": "a@example.com" }));
        assert_close(compute_confidence(&data, DocumentType::Generic), 40.0);
    }
}
