//! Tax-ID (PAN) card field extraction.

use lazy_static::lazy_static;

use crate::models::document::TaxIdFields;

use super::rules::{collapsed_name, Rule, RuleSet, DATE_OF_BIRTH};

lazy_static! {
    static ref ID_NUMBER: RuleSet = RuleSet::new(
        "id_number",
        vec![
            id_rule("account_number_label", r"Permanent Account Number[\s:]*([A-Z]{5}[0-9]{4}[A-Z])"),
            id_rule("pan_label", r"PAN[\s:]*([A-Z]{5}[0-9]{4}[A-Z])"),
            id_rule("bare", r"([A-Z]{5}[0-9]{4}[A-Z])"),
        ],
    );

    static ref NAME: RuleSet = RuleSet::new(
        "name",
        vec![
            name_rule("name_label", r"Name[\s:]*([A-Za-z\s.]+?)(?:\n|Father|Date|$)"),
            name_rule(
                "name_of_person_label",
                r"Name of Person[\s:]*([A-Za-z\s.]+?)(?:\n|Father|Date|$)",
            ),
            name_rule(
                "department_header",
                r"Income Tax Department[\s:]*([A-Za-z\s.]+?)(?:\n|Father|Date|$)",
            ),
        ],
    );

    static ref FATHER_NAME: RuleSet = RuleSet::new(
        "father_name",
        vec![
            name_rule("fathers_name_label", r"Father's Name[\s:]*([A-Za-z\s.]+?)(?:\n|Date|$)"),
            name_rule("father_name_label", r"Father Name[\s:]*([A-Za-z\s.]+?)(?:\n|Date|$)"),
        ],
    );

    static ref SIGNATURE: RuleSet = RuleSet::new(
        "signature",
        vec![
            name_rule("signature_label", r"Signature[\s:]*([A-Za-z\s.]+?)(?:\n|$)"),
            name_rule("sign_label", r"Sign[\s:]*([A-Za-z\s.]+?)(?:\n|$)"),
        ],
    );
}

fn id_rule(name: &'static str, pattern: &str) -> Rule {
    Rule::with_normalizer(name, &format!("(?i){}", pattern), |s| {
        Some(s.trim().to_uppercase())
    })
}

fn name_rule(name: &'static str, pattern: &str) -> Rule {
    Rule::with_normalizer(name, &format!("(?im){}", pattern), collapsed_name)
}

/// Extract tax-ID fields from raw text.
pub fn extract_tax_id(text: &str) -> TaxIdFields {
    TaxIdFields {
        id_number: ID_NUMBER.value_or_default(text),
        name: NAME.value_or_default(text),
        father_name: FATHER_NAME.value_or_default(text),
        date_of_birth: DATE_OF_BIRTH.value_or_default(text),
        signature: SIGNATURE.value_or_default(text),
    }
}
