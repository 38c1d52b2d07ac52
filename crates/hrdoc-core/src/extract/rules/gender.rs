//! Gender rules for identity documents.

use lazy_static::lazy_static;

use super::{Rule, RuleSet};

lazy_static! {
    pub static ref GENDER: RuleSet = RuleSet::new(
        "gender",
        vec![
            gender_rule("gender_label", r"(?i)Gender[\s:]*(Male|M|Female|F|Other)\b"),
            gender_rule("sex_label", r"(?i)Sex[\s:]*(Male|M|Female|F|Other)\b"),
            gender_rule("bare_male", r"(?i)\b(Male|M)\b"),
            gender_rule("bare_female", r"(?i)\b(Female|F)\b"),
            gender_rule("bare_other", r"(?i)\b(Other)\b"),
        ],
    );
}

fn gender_rule(name: &'static str, pattern: &str) -> Rule {
    Rule::with_normalizer(name, pattern, normalize_gender)
}

/// Map a recognized gender token to `Male`, `Female` or `Other`.
pub fn normalize_gender(token: &str) -> Option<String> {
    let value = match token.trim().to_uppercase().as_str() {
        "" => return None,
        "MALE" | "M" => "Male",
        "FEMALE" | "F" => "Female",
        _ => "Other",
    };
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_gender() {
        assert_eq!(normalize_gender("M").as_deref(), Some("Male"));
        assert_eq!(normalize_gender("FEMALE").as_deref(), Some("Female"));
        assert_eq!(normalize_gender("other").as_deref(), Some("Other"));
    }

    #[test]
    fn test_labeled_gender() {
        assert_eq!(GENDER.value_or_default("Gender: F"), "Female");
        assert_eq!(GENDER.value_or_default("Sex : MALE"), "Male");
    }

    #[test]
    fn test_bare_gender_order() {
        // Male rule is declared before Female and wins even when later in text.
        assert_eq!(GENDER.value_or_default("FEMALE / Male"), "Male");
        assert_eq!(GENDER.value_or_default("Ravi Kumar\nFemale"), "Female");
    }

    #[test]
    fn test_no_gender() {
        assert_eq!(GENDER.value_or_default("Government of India"), "");
    }
}
