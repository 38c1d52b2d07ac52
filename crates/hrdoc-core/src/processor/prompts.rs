//! Prompts for the primary (text-completion) extraction path.

use crate::models::document::DocumentType;

/// Characters of document text included in a prompt by default.
pub const DEFAULT_PROMPT_TEXT_CHARS: usize = 4000;

const RESUME_SCHEMA: &str = r#"{
  "name": "Full name of the candidate",
  "email": "Email address",
  "phone": "Phone number",
  "city": "Current city/location",
  "skills": ["skill1", "skill2", "skill3"],
  "experience": [
    {
      "company": "Company name",
      "position": "Job title",
      "duration": "Duration (e.g., 2020-2023)",
      "description": "Brief description"
    }
  ],
  "education": [
    {
      "degree": "Degree name",
      "institution": "University/College name",
      "year": "Year of completion",
      "field": "Field of study"
    }
  ],
  "total_experience_years": 0.0,
  "summary": "Professional summary"
}"#;

const RESUME_GUIDELINES: &str = "\
- Pay special attention to location information
- If any field is not found, use empty string for strings, empty array for arrays, or 0 for numbers";

const NATIONAL_ID_SCHEMA: &str = r#"{
  "id_number": "12-digit Aadhaar number (e.g., 123456789012)",
  "name": "Full name as shown on the card",
  "first_name": "First name",
  "last_name": "Remaining names",
  "father_name": "Father's name if mentioned",
  "mother_name": "Mother's name if mentioned",
  "spouse_name": "Husband's or spouse's name if mentioned",
  "gender": "Male/Female/Other",
  "date_of_birth": "Date of birth in DD-MM-YYYY format",
  "address": "Complete address as shown on the card",
  "postal_code": "PIN code (6-digit number)",
  "state": "State name",
  "district": "District name if mentioned",
  "city": "City/Village name",
  "enrollment_number": "Enrollment number if mentioned",
  "enrollment_date": "Enrollment date in DD-MM-YYYY format if mentioned"
}"#;

const NATIONAL_ID_GUIDELINES: &str = "\
- The Aadhaar number is always 12 digits; return it without spaces or dashes
- Name should be exactly as written on the card
- Address should include house number, street and area
- Extract the state name in English
- If any field is not found, use empty string for strings
- Pay attention to both English and local language text";

const TAX_ID_SCHEMA: &str = r#"{
  "id_number": "10-character PAN number (e.g., ABCDE1234F)",
  "name": "Full name as shown on the card",
  "father_name": "Father's name if mentioned",
  "date_of_birth": "Date of birth in DD-MM-YYYY format",
  "signature": "Signature text if mentioned"
}"#;

const TAX_ID_GUIDELINES: &str = "\
- The PAN is always 10 characters: 5 uppercase letters, 4 digits, 1 uppercase letter
- Name should be exactly as written on the card
- If any field is not found, use empty string for strings";

/// Build the completion prompt for a document, including the first
/// [`DEFAULT_PROMPT_TEXT_CHARS`] characters of its text.
pub fn build_prompt(text: &str, document_type: DocumentType) -> String {
    build_prompt_with_limit(text, document_type, DEFAULT_PROMPT_TEXT_CHARS)
}

/// Build the completion prompt, truncating the text to `max_chars` characters.
pub fn build_prompt_with_limit(text: &str, document_type: DocumentType, max_chars: usize) -> String {
    let text = truncate_chars(text, max_chars);

    let (role, subject, schema, guidelines) = match document_type {
        DocumentType::Resume => (
            "an expert resume parser",
            "Extract the following information from the resume text below.",
            RESUME_SCHEMA,
            RESUME_GUIDELINES,
        ),
        DocumentType::NationalId => (
            "an expert document parser",
            "Extract Aadhaar card information from the text below.",
            NATIONAL_ID_SCHEMA,
            NATIONAL_ID_GUIDELINES,
        ),
        DocumentType::TaxId => (
            "an expert document parser",
            "Extract PAN card information from the text below.",
            TAX_ID_SCHEMA,
            TAX_ID_GUIDELINES,
        ),
        DocumentType::Generic => {
            return format!(
                "Extract key information from this {} document.\n\
                 Return ONLY valid JSON format.\n\n\
                 Document Text:\n{}\n\n\
                 Return JSON with extracted fields:",
                document_type, text
            );
        }
    };

    format!(
        "You are {}. {}\n\
         Return ONLY valid JSON format with no additional text or explanation.\n\n\
         Required JSON structure:\n{}\n\n\
         Important extraction guidelines:\n{}\n\n\
         Document Text:\n{}\n\n\
         Return ONLY the JSON object:",
        role, subject, schema, guidelines, text
    )
}

/// Leading `max_chars` characters of `text`, cut on a char boundary.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_prompt_lists_keys() {
        let prompt = build_prompt("Anita Rao", DocumentType::Resume);
        assert!(prompt.starts_with("You are an expert resume parser."));
        for key in ["\"name\"", "\"skills\"", "\"total_experience_years\"", "\"summary\""] {
            assert!(prompt.contains(key), "missing {}", key);
        }
        assert!(prompt.contains("Document Text:\nAnita Rao\n"));
        assert!(prompt.ends_with("Return ONLY the JSON object:"));
    }

    #[test]
    fn test_id_prompts_use_schema_names() {
        let prompt = build_prompt("", DocumentType::NationalId);
        assert!(prompt.contains("\"id_number\""));
        assert!(prompt.contains("\"postal_code\""));
        assert!(prompt.contains("\"spouse_name\""));

        let prompt = build_prompt("", DocumentType::TaxId);
        assert!(prompt.contains("ABCDE1234F"));
        assert!(prompt.contains("\"signature\""));
    }

    #[test]
    fn test_generic_prompt_names_type() {
        let prompt = build_prompt("hello", DocumentType::Generic);
        assert!(prompt.starts_with("Extract key information from this generic document."));
        assert!(prompt.contains("hello"));
    }

    #[test]
    fn test_text_is_truncated() {
        let text = "é".repeat(DEFAULT_PROMPT_TEXT_CHARS + 10);
        let prompt = build_prompt(&text, DocumentType::Resume);
        assert!(prompt.contains(&"é".repeat(DEFAULT_PROMPT_TEXT_CHARS)));
        assert!(!prompt.contains(&"é".repeat(DEFAULT_PROMPT_TEXT_CHARS + 1)));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("", 0), "");
    }
}
