//! National-ID (Aadhaar) card field extraction.

use lazy_static::lazy_static;

use crate::models::document::NationalIdFields;

use super::rules::dates::ENROLLMENT_DATE;
use super::rules::patterns::{ID_SEPARATORS, LETTERS_ONLY, NATIONAL_ID_NUMBER};
use super::rules::{
    collapsed, collapsed_name, extract_address, Rule, RuleSet, DATE_OF_BIRTH, GENDER,
};

/// Words that rule a line out as the holder's name.
const NAME_DENYLIST: &[&str] = &[
    "government",
    "india",
    "aadhaar",
    "card",
    "number",
    "date",
    "birth",
];

/// How many leading lines the name scan looks at.
const NAME_SCAN_LINES: usize = 15;

lazy_static! {
    static ref ID_NUMBER: RuleSet = RuleSet::new(
        "id_number",
        vec![
            Rule::with_normalizer("digit_groups", NATIONAL_ID_NUMBER.as_str(), normalize_id_number)
                .scanning(),
        ],
    );

    // Labels are anchored to the line start so `Father's Name:` is not read
    // as the holder's name.
    static ref NAME: RuleSet = RuleSet::new(
        "name",
        vec![
            Rule::with_normalizer(
                "name_label",
                r"(?im)^[ \t]*Name[\s:]*([A-Za-z\s]+?)(?:\n|$)",
                collapsed,
            ),
            Rule::with_normalizer(
                "name_of_person_label",
                r"(?im)^[ \t]*Name of Person[\s:]*([A-Za-z\s]+?)(?:\n|$)",
                collapsed,
            ),
            Rule::with_normalizer(
                "full_name_label",
                r"(?im)^[ \t]*Full Name[\s:]*([A-Za-z\s]+?)(?:\n|$)",
                collapsed,
            ),
            Rule::with_normalizer(
                "bilingual",
                r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\s*/\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)",
                collapsed,
            ),
        ],
    );

    static ref FATHER_NAME: RuleSet = RuleSet::new(
        "father_name",
        vec![
            relation_rule("son_or_daughter_of", r"\b(?:S/O|D/O)[\s:,]*([A-Za-z\s.]+?)(?:,|\n|$)"),
            relation_rule("father_name_label", r"Father'?s?\s*Name[\s:]*([A-Za-z\s.]+?)(?:\n|$)"),
        ],
    );

    static ref MOTHER_NAME: RuleSet = RuleSet::new(
        "mother_name",
        vec![relation_rule(
            "mother_name_label",
            r"Mother'?s?\s*Name[\s:]*([A-Za-z\s.]+?)(?:\n|$)",
        )],
    );

    static ref SPOUSE_NAME: RuleSet = RuleSet::new(
        "spouse_name",
        vec![
            relation_rule("wife_of", r"\bW/O[\s:,]*([A-Za-z\s.]+?)(?:,|\n|$)"),
            relation_rule(
                "spouse_name_label",
                r"(?:Husband|Spouse)'?s?\s*Name[\s:]*([A-Za-z\s.]+?)(?:\n|$)",
            ),
        ],
    );

    static ref POSTAL_CODE: RuleSet = RuleSet::new(
        "postal_code",
        vec![
            Rule::new("pin_label", r"(?i)\b(?:PIN\s*Code|Pincode|PIN)[\s:]*(\d{6})\b"),
            Rule::new("six_digits", r"\b(\d{6})\b"),
        ],
    );

    static ref STATE: RuleSet = RuleSet::new("state", vec![region_rule("state_label", "State")]);

    static ref DISTRICT: RuleSet =
        RuleSet::new("district", vec![region_rule("district_label", "District")]);

    static ref CITY: RuleSet = RuleSet::new(
        "city",
        vec![
            region_rule("city_label", "City"),
            region_rule("vtc_label", "VTC"),
            region_rule("town_label", "Town"),
        ],
    );

    static ref ENROLLMENT_NUMBER: RuleSet = RuleSet::new(
        "enrollment_number",
        vec![
            Rule::new(
                "enrollment_label",
                r"(?i)Enrol+ment\s*(?:No\.?|Number)?[\s:]*(\d{4}/\d+/\d+)",
            ),
            Rule::new("slash_groups", r"\b(\d{4}/\d+/\d+)\b"),
        ],
    );
}

fn relation_rule(name: &'static str, pattern: &str) -> Rule {
    Rule::with_normalizer(name, &format!("(?im){}", pattern), collapsed_name)
}

fn region_rule(name: &'static str, label: &str) -> Rule {
    let pattern = format!(r"(?im)\b{}\b[\s:]*([A-Za-z\s]+?)(?:,|\n|$)", label);
    Rule::with_normalizer(name, &pattern, collapsed)
}

/// Strip separators; accept exactly twelve ASCII digits.
fn normalize_id_number(raw: &str) -> Option<String> {
    let digits = ID_SEPARATORS.replace_all(raw, "");
    (digits.len() == 12 && digits.bytes().all(|b| b.is_ascii_digit())).then(|| digits.into_owned())
}

/// Extract national-ID fields from raw text.
pub fn extract_national_id(text: &str) -> NationalIdFields {
    let name = extract_name(text);
    let (first_name, last_name) = split_name(&name);

    NationalIdFields {
        id_number: ID_NUMBER.value_or_default(text),
        first_name,
        last_name,
        name,
        father_name: FATHER_NAME.value_or_default(text),
        mother_name: MOTHER_NAME.value_or_default(text),
        spouse_name: SPOUSE_NAME.value_or_default(text),
        gender: GENDER.value_or_default(text),
        date_of_birth: DATE_OF_BIRTH.value_or_default(text),
        address: extract_address(text),
        postal_code: POSTAL_CODE.value_or_default(text),
        state: STATE.value_or_default(text),
        district: DISTRICT.value_or_default(text),
        city: CITY.value_or_default(text),
        enrollment_number: ENROLLMENT_NUMBER.value_or_default(text),
        enrollment_date: ENROLLMENT_DATE.value_or_default(text),
    }
}

fn extract_name(text: &str) -> String {
    if let Some(m) = NAME.first_match(text) {
        return m.value;
    }

    text.split('\n')
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
        .unwrap_or_default()
}

fn looks_like_name(line: &str) -> bool {
    let tokens = line.split_whitespace().count();
    let len = line.chars().count();
    let lower = line.to_lowercase();

    (2..=4).contains(&tokens)
        && LETTERS_ONLY.is_match(line)
        && len > 3
        && len < 50
        && !NAME_DENYLIST.iter().any(|w| lower.contains(w))
}

/// First token, and the remaining tokens joined by spaces.
fn split_name(name: &str) -> (String, String) {
    let mut tokens = name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let rest = tokens.collect::<Vec<_>>().join(" ");
    (first, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD: &str = "Government of India\n\
        Name: Ravi Kumar Reddy\n\
        Father's Name: Suresh Reddy\n\
        DOB: 15/08/1990\n\
        Gender: MALE\n\
        Address: 12-3-45, Gandhi Nagar, Vijayawada\n\
        District: Krishna\n\
        State: Andhra Pradesh\n\
        VTC: Vijayawada\n\
        PIN Code: 520003\n\
        Enrolment No: 1234/56789/01234\n\
        Enrolment Date: 12/11/2012\n\
        1234 5678 9012\n";

    #[test]
    fn test_full_card() {
        let fields = extract_national_id(CARD);
        let expected = NationalIdFields {
            id_number: "123456789012".to_string(),
            name: "Ravi Kumar Reddy".to_string(),
            first_name: "Ravi".to_string(),
            last_name: "Kumar Reddy".to_string(),
            father_name: "Suresh Reddy".to_string(),
            gender: "Male".to_string(),
            date_of_birth: "15-08-1990".to_string(),
            address: "12-3-45, Gandhi Nagar, Vijayawada".to_string(),
            postal_code: "520003".to_string(),
            state: "Andhra Pradesh".to_string(),
            district: "Krishna".to_string(),
            city: "Vijayawada".to_string(),
            enrollment_number: "1234/56789/01234".to_string(),
            enrollment_date: "12-11-2012".to_string(),
            ..NationalIdFields::default()
        };
        assert_eq!(fields, expected);
    }

    #[test]
    fn test_id_number_normalization() {
        assert_eq!(extract_national_id("1234 5678 9012").id_number, "123456789012");
        assert_eq!(extract_national_id("1234-5678-9012").id_number, "123456789012");
        assert_eq!(extract_national_id("1234\t5678\t9012").id_number, "123456789012");
        assert_eq!(extract_national_id("12345").id_number, "");
    }

    #[test]
    fn test_bilingual_name() {
        let text = "Narikenabilli Rajini / Narikenabilli Rajini\nFemale";
        let fields = extract_national_id(text);
        assert_eq!(fields.name, "Narikenabilli Rajini");
        assert_eq!(fields.first_name, "Narikenabilli");
        assert_eq!(fields.last_name, "Rajini");
        assert_eq!(fields.gender, "Female");
    }

    #[test]
    fn test_name_line_scan_skips_denylist() {
        let text = "Government of India\nAadhaar Card\nMeena Devi\nDOB: 01/01/1985";
        assert_eq!(extract_national_id(text).name, "Meena Devi");
    }

    #[test]
    fn test_single_token_name() {
        let (first, last) = split_name("Rajini");
        assert_eq!(first, "Rajini");
        assert_eq!(last, "");
    }

    #[test]
    fn test_relation_labels() {
        let text = "S/O Venkat Rao, 4 Main Road\nMother's Name: Lakshmi\nW/O: Anil Kumar";
        let fields = extract_national_id(text);
        assert_eq!(fields.father_name, "Venkat Rao");
        assert_eq!(fields.mother_name, "Lakshmi");
        assert_eq!(fields.spouse_name, "Anil Kumar");
    }

    #[test]
    fn test_bare_postal_code() {
        assert_eq!(extract_national_id("Hyderabad 500001").postal_code, "500001");
    }

    #[test]
    fn test_empty_text_is_baseline() {
        assert_eq!(extract_national_id(""), NationalIdFields::default());
    }
}
