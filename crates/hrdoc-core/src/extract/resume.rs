//! Resume field extraction.

use lazy_static::lazy_static;

use crate::models::document::ResumeFields;

use super::rules::patterns::{EMAIL, PHONE};
use super::rules::{FieldExtractor, Rule, RuleSet};

/// Skill vocabulary, matched case-insensitively as substrings.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "node",
    "django",
    "flask",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "git",
    "docker",
    "aws",
    "azure",
    "gcp",
    "html",
    "css",
    "bootstrap",
    "jquery",
    "php",
    "c++",
    "c#",
    ".net",
    "spring",
    "machine learning",
    "ai",
    "data science",
    "pandas",
    "numpy",
    "tensorflow",
    "project management",
    "agile",
    "scrum",
    "leadership",
    "communication",
];

lazy_static! {
    static ref EXPERIENCE_YEARS: RuleSet<f64> = RuleSet::new(
        "total_experience_years",
        vec![
            years_rule(
                "years_of_experience",
                r"(?i)(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\s*(?:of\s*)?experience",
            ),
            years_rule(
                "experience_label",
                r"(?i)experience[:\s]*(\d+(?:\.\d+)?)\s*(?:years?|yrs?)",
            ),
            years_rule("years_in", r"(?i)(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\s*in\s*\w+"),
        ],
    );

    static ref EDUCATION: RuleSet = RuleSet::new(
        "education",
        vec![
            education_rule(
                "degree",
                r"(?i)(Bachelor|Master|PhD|B\.Tech|M\.Tech|B\.E|M\.E|B\.Com|M\.Com|B\.A|M\.A|B\.Sc|M\.Sc)[^.\n]*",
            ),
            education_rule("certificate", r"(?i)(Diploma|Certificate|Degree)[^.\n]*"),
            education_rule("education_label", r"(?i)Education[:\s]*([^.\n]+)"),
            education_rule("qualification_label", r"(?i)Qualification[:\s]*([^.\n]+)"),
        ],
    );

    static ref CITY: RuleSet = RuleSet::new(
        "city",
        vec![
            Rule::with_normalizer(
                "location_label",
                r"(?i)(?:Location|City|Address)[:\s]*([^.\n,]+)",
                city_candidate,
            ),
            Rule::with_normalizer(
                "city_state_code",
                r"(?i)([A-Za-z ]+),\s*[A-Z]{2}",
                city_candidate,
            ),
        ],
    );
}

fn years_rule(name: &'static str, pattern: &str) -> Rule<f64> {
    Rule::with_normalizer(name, pattern, |s| s.trim().parse::<f64>().ok())
}

fn education_rule(name: &'static str, pattern: &str) -> Rule {
    Rule::with_normalizer(name, pattern, |s| {
        let s = s.trim();
        (s.chars().count() > 5).then(|| s.to_string())
    })
}

fn city_candidate(s: &str) -> Option<String> {
    let s = s.trim();
    let len = s.chars().count();
    (len > 2 && len < 50).then(|| s.to_string())
}

/// Extract resume fields from raw text.
pub fn extract_resume(text: &str) -> ResumeFields {
    let mut fields = ResumeFields {
        name: extract_name(text),
        email: EMAIL
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        phone: PHONE
            .find(text)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        city: CITY.value_or_default(text),
        skills: extract_skills(text),
        education: extract_education(text),
        ..ResumeFields::default()
    };

    if let Some(years) = EXPERIENCE_YEARS.extract(text) {
        fields.total_experience_years = years.value;
        // Matches the fallback schema: one summary line, not per-job entries.
        fields.experience = vec![format!("{:?} years of experience", years.value)];
    }

    fields
}

/// First of the leading five lines that looks like a person's name.
fn extract_name(text: &str) -> String {
    text.split('\n')
        .take(5)
        .map(str::trim)
        .find(|line| {
            !line.is_empty() && line.split_whitespace().count() <= 4 && line.chars().count() > 3
        })
        .map(str::to_string)
        .unwrap_or_default()
}

/// Distinct education captures in first-seen order.
fn extract_education(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in EDUCATION.extract_all(text) {
        if !found.contains(&m.value) {
            found.push(m.value);
        }
    }
    found
}

/// Vocabulary skills present in the text, title-cased, in vocabulary order.
fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| lower.contains(*skill))
        .map(|skill| title_case(skill))
        .collect()
}

/// Upper-case every letter that follows a non-letter; lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RESUME: &str = "Anita Desai\n\
        Senior Software Engineer\n\
        anita.desai@example.com | +91 98765 43210\n\
        Location: Pune\n\
        \n\
        Summary: 7 years of experience building web platforms with React and Python.\n\
        Education: B.Tech in Computer Science\n\
        Master of Science, Data Science\n";

    #[test]
    fn test_contact_fields() {
        let fields = extract_resume(RESUME);
        assert_eq!(fields.name, "Anita Desai");
        assert_eq!(fields.email, "anita.desai@example.com");
        assert_eq!(fields.phone, "+91 98765 43210");
        assert_eq!(fields.city, "Pune");
        assert_eq!(fields.summary, "");
    }

    #[test]
    fn test_experience_years() {
        let fields = extract_resume(RESUME);
        assert_eq!(fields.total_experience_years, 7.0);
        assert_eq!(fields.experience, vec!["7.0 years of experience"]);
    }

    #[test]
    fn test_experience_pattern_order_beats_text_order() {
        // "3 years in Java" appears first, but the label pattern is declared earlier.
        let text = "3 years in Java\nExperience: 5.5 years";
        let fields = extract_resume(text);
        assert_eq!(fields.total_experience_years, 5.5);
        assert_eq!(fields.experience, vec!["5.5 years of experience"]);
    }

    #[test]
    fn test_skills_in_vocabulary_order() {
        let fields = extract_resume("worked with REACT, then python");
        assert_eq!(fields.skills, vec!["Python", "React"]);
    }

    #[test]
    fn test_skill_title_case() {
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case(".net"), ".Net");
        assert_eq!(title_case("machine learning"), "Machine Learning");
    }

    #[test]
    fn test_education_captures() {
        let fields = extract_resume(RESUME);
        assert_eq!(fields.education, vec!["B.Tech", "Master"]);
    }

    #[test]
    fn test_education_label_and_dedup() {
        let text = "Qualification: Diploma in Nursing\nDiploma holder";
        let fields = extract_resume(text);
        assert_eq!(fields.education, vec!["Diploma", "Diploma in Nursing"]);
    }

    #[test]
    fn test_name_skips_long_lines() {
        let text = "\nCurriculum vitae of the applicant below\nRaj\nMeera Nair\n";
        assert_eq!(extract_resume(text).name, "Meera Nair");
    }

    #[test]
    fn test_city_state_code() {
        let fields = extract_resume("Austin, TX 78701");
        assert_eq!(fields.city, "Austin");
    }

    #[test]
    fn test_city_label_length_bounds() {
        // Two-letter label value falls through to the "City, ST" rule
        let fields = extract_resume("Location: NY\nAustin, TX 78701");
        assert_eq!(fields.city, "Austin");

        let long = "a".repeat(50);
        let fields = extract_resume(&format!("City: {}\nPune, MH", long));
        assert_eq!(fields.city, "Pune");

        let fields = extract_resume(&format!("City: {}", long));
        assert_eq!(fields.city, "");
    }

    #[test]
    fn test_city_state_code_stays_on_one_line() {
        let fields = extract_resume("Skills\nPython\nSan Jose, CA");
        assert_eq!(fields.city, "San Jose");
    }

    #[test]
    fn test_empty_text_is_baseline() {
        assert_eq!(extract_resume(""), ResumeFields::default());
    }
}
