//! Date rules for identity documents.

use lazy_static::lazy_static;

use super::{Rule, RuleSet};

lazy_static! {
    pub static ref DATE_OF_BIRTH: RuleSet = RuleSet::new(
        "date_of_birth",
        vec![
            date_rule("date_of_birth_label", r"(?i)Date of Birth[\s:]*(\d{2}[/-]\d{2}[/-]\d{4})"),
            date_rule("dob_label", r"(?i)DOB[\s:]*(\d{2}[/-]\d{2}[/-]\d{4})"),
            date_rule("birth_label", r"(?i)Birth[\s:]*(\d{2}[/-]\d{2}[/-]\d{4})"),
            date_rule("day_first", r"\b(\d{2}[/-]\d{2}[/-]\d{4})\b"),
            date_rule("year_first", r"\b(\d{4}[/-]\d{2}[/-]\d{2})\b"),
        ],
    );

    pub static ref ENROLLMENT_DATE: RuleSet = RuleSet::new(
        "enrollment_date",
        vec![
            date_rule(
                "enrollment_date_label",
                r"(?i)Enrol+ment\s+Date[\s:]*(\d{2}[/-]\d{2}[/-]\d{4})",
            ),
            date_rule(
                "date_of_enrollment_label",
                r"(?i)Date\s+of\s+Enrol+ment[\s:]*(\d{2}[/-]\d{2}[/-]\d{4})",
            ),
        ],
    );
}

fn date_rule(name: &'static str, pattern: &str) -> Rule {
    Rule::with_normalizer(name, pattern, normalize_date)
}

/// Reorder a `DD/MM/YYYY`, `DD-MM-YYYY`, `YYYY/MM/DD` or `YYYY-MM-DD` date
/// into `DD-MM-YYYY`.
///
/// The separator is `/` when present, otherwise `-`. Values that do not split
/// into exactly three segments (mixed separators) are rejected.
pub fn normalize_date(date: &str) -> Option<String> {
    let separator = if date.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = date.trim().split(separator).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };

    if first.len() == 4 {
        Some(format!("{}-{}-{}", third, second, first))
    } else {
        Some(format!("{}-{}-{}", first, second, third))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("05/03/1990").as_deref(), Some("05-03-1990"));
        assert_eq!(normalize_date("05-03-1990").as_deref(), Some("05-03-1990"));
        assert_eq!(normalize_date("1990-03-05").as_deref(), Some("05-03-1990"));
        assert_eq!(normalize_date("1990/03/05").as_deref(), Some("05-03-1990"));
        assert_eq!(normalize_date("05/03-1990"), None);
    }

    #[test]
    fn test_labeled_date_of_birth() {
        let m = DATE_OF_BIRTH.first_match("DOB: 05/03/1990").unwrap();
        assert_eq!(m.value, "05-03-1990");
        assert_eq!(m.rule, "dob_label");
    }

    #[test]
    fn test_bare_year_first_date() {
        let m = DATE_OF_BIRTH.first_match("born 1990-03-05 in Pune").unwrap();
        assert_eq!(m.value, "05-03-1990");
        assert_eq!(m.rule, "year_first");
    }

    #[test]
    fn test_label_beats_earlier_bare_date() {
        let text = "Issued 01/01/2020\nDate of Birth: 17/08/1985";
        assert_eq!(DATE_OF_BIRTH.value_or_default(text), "17-08-1985");
    }

    #[test]
    fn test_unsplittable_date_falls_through() {
        let text = "DOB: 05/03-1990\nRecorded 1990-03-05";
        let m = DATE_OF_BIRTH.first_match(text).unwrap();
        assert_eq!(m.value, "05-03-1990");
        assert_eq!(m.rule, "year_first");
    }

    #[test]
    fn test_enrollment_date() {
        let text = "Enrolment No: 1234/56789/01234\nEnrolment Date: 12/11/2012";
        assert_eq!(ENROLLMENT_DATE.value_or_default(text), "12-11-2012");
    }
}
