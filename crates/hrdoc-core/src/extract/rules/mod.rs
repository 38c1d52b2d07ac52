//! Ordered regex rules shared by the document extractors.
//!
//! A [`Rule`] pairs a pattern with a normalizer. A [`RuleSet`] evaluates its
//! rules strictly in declaration order: the first rule whose match survives
//! normalization wins, so an earlier rule takes priority over a match that
//! appears earlier in the text.

pub mod address;
pub mod dates;
pub mod gender;
pub mod patterns;

pub use address::extract_address;
pub use dates::{normalize_date, DATE_OF_BIRTH};
pub use gender::{normalize_gender, GENDER};

use regex::{Captures, Regex};
use tracing::trace;

use patterns::WHITESPACE;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value produced by a rule, with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Normalized value.
    pub value: T,
    /// Name of the rule that produced it.
    pub rule: &'static str,
    /// Byte span of the captured text.
    pub position: Option<(usize, usize)>,
    /// Captured text before normalization.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Turns captured text into a field value, or rejects it.
pub type Normalizer<T> = fn(&str) -> Option<T>;

/// One `(pattern, normalizer)` pair.
pub struct Rule<T = String> {
    name: &'static str,
    pattern: Regex,
    normalize: Normalizer<T>,
    scan: bool,
}

impl Rule<String> {
    /// A rule whose value is the trimmed capture.
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self::with_normalizer(name, pattern, trimmed)
    }
}

impl<T> Rule<T> {
    /// A rule with a custom normalizer.
    ///
    /// Panics if `pattern` is not a valid regex; rules are built from
    /// literals at first use.
    pub fn with_normalizer(name: &'static str, pattern: &str, normalize: Normalizer<T>) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for rule {}: {}", name, e));
        Self {
            name,
            pattern,
            normalize,
            scan: false,
        }
    }

    /// Try every match in the text instead of only the first one.
    pub fn scanning(mut self) -> Self {
        self.scan = true;
        self
    }

    fn normalize_captures(&self, caps: &Captures<'_>) -> Option<ExtractionMatch<T>> {
        // Value comes from the first capture group, or the whole match.
        let m = caps.get(1).or_else(|| caps.get(0))?;
        let value = (self.normalize)(m.as_str())?;
        Some(ExtractionMatch::new(value, self.name, m.as_str()).with_position(m.start(), m.end()))
    }

    /// Apply the rule: the first match (or, when scanning, the first match
    /// that normalizes).
    pub fn apply(&self, text: &str) -> Option<ExtractionMatch<T>> {
        if self.scan {
            self.pattern
                .captures_iter(text)
                .find_map(|caps| self.normalize_captures(&caps))
        } else {
            let caps = self.pattern.captures(text)?;
            self.normalize_captures(&caps)
        }
    }

    /// Every match of the rule that survives normalization, in text order.
    pub fn apply_all(&self, text: &str) -> Vec<ExtractionMatch<T>> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| self.normalize_captures(&caps))
            .collect()
    }
}

/// An ordered list of rules for one field.
pub struct RuleSet<T = String> {
    field: &'static str,
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new(field: &'static str, rules: Vec<Rule<T>>) -> Self {
        Self { field, rules }
    }

    /// Value of the first rule, in declaration order, that yields one.
    pub fn first_match(&self, text: &str) -> Option<ExtractionMatch<T>> {
        let found = self.rules.iter().find_map(|rule| rule.apply(text));
        if let Some(m) = &found {
            trace!("{}: rule '{}' matched {:?}", self.field, m.rule, m.source);
        }
        found
    }
}

impl RuleSet<String> {
    /// First matching value, or the empty default.
    pub fn value_or_default(&self, text: &str) -> String {
        self.first_match(text).map(|m| m.value).unwrap_or_default()
    }
}

impl<T> FieldExtractor for RuleSet<T> {
    type Output = ExtractionMatch<T>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.first_match(text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.rules
            .iter()
            .flat_map(|rule| rule.apply_all(text))
            .collect()
    }
}

/// Trimmed capture; empty values are rejected.
pub fn trimmed(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Capture with whitespace runs collapsed to single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Whitespace-collapsed capture; empty values are rejected.
pub fn collapsed(s: &str) -> Option<String> {
    let s = collapse_whitespace(s);
    (!s.is_empty()).then_some(s)
}

/// Whitespace-collapsed capture longer than two characters.
pub fn collapsed_name(s: &str) -> Option<String> {
    collapsed(s).filter(|s| s.chars().count() > 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &str) -> Option<u32> {
        s.parse().ok()
    }

    #[test]
    fn test_declaration_order_beats_text_order() {
        let set = RuleSet::new(
            "code",
            vec![
                Rule::new("labeled", r"Code:\s*(\w+)"),
                Rule::new("bare", r"\b([A-Z]{3})\b"),
            ],
        );

        let m = set.first_match("ABC first, then Code: xyz").unwrap();
        assert_eq!(m.value, "xyz");
        assert_eq!(m.rule, "labeled");
    }

    #[test]
    fn test_rejected_value_falls_through_to_next_rule() {
        let set = RuleSet::new(
            "count",
            vec![
                Rule::with_normalizer("digits", r"n=(\S+)", number),
                Rule::with_normalizer("words", r"count (\d+)", number),
            ],
        );

        // First rule matches "x1" which fails to parse; only its first match is tried.
        let m = set.first_match("n=x1 n=7 count 3").unwrap();
        assert_eq!(m.value, 3);
        assert_eq!(m.rule, "words");
    }

    #[test]
    fn test_scanning_rule_tries_every_match() {
        let rule = Rule::with_normalizer("digits", r"n=(\S+)", number).scanning();
        let m = rule.apply("n=x1 n=7").unwrap();
        assert_eq!(m.value, 7);
        assert_eq!(m.position, Some((7, 8)));
    }

    #[test]
    fn test_extract_all_in_rule_order() {
        let set = RuleSet::new(
            "words",
            vec![Rule::new("b", r"\bb\w+"), Rule::new("a", r"\ba\w+")],
        );
        let values: Vec<String> = set
            .extract_all("apple banana avocado")
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec!["banana", "apple", "avocado"]);
    }

    #[test]
    fn test_normalizers() {
        assert_eq!(trimmed("  a b "), Some("a b".to_string()));
        assert_eq!(trimmed("   "), None);
        assert_eq!(collapsed(" Ravi \n  Kumar "), Some("Ravi Kumar".to_string()));
        assert_eq!(collapsed_name("Al"), None);
        assert_eq!(collapsed_name("Ali"), Some("Ali".to_string()));
    }
}
