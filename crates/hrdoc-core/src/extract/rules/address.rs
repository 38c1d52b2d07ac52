//! Address extraction for national-ID cards.
//!
//! Three strategies are tried in order, and the first that produces a
//! non-empty address wins:
//! 1. the block of lines following a line that reads `To` (letter-style cards),
//! 2. label patterns such as `C/O:` or `Address:`,
//! 3. a scan for lines containing address keywords, continued until a PIN
//!    code line or personal details.

use lazy_static::lazy_static;

use super::patterns::{
    ADDRESS_LINE, LEADING_JUNK_TOKEN, LEADING_NON_ALNUM, LEADING_NON_WORD, LEADING_SHORT_CAPS,
    PIN_RUN,
};
use super::{collapsed, collapse_whitespace, Rule, RuleSet};

/// Lines starting the holder's personal details, which end an address block.
const PERSONAL_INFO_MARKERS: &[&str] = &[
    "name of person",
    "dob:",
    "gender:",
    "aadhaar",
    "mobile:",
    "number:",
];

/// Substrings that mark a line as part of an address.
const ADDRESS_KEYWORDS: &[&str] = &[
    "door no",
    "door number",
    "c/o",
    "street",
    "road",
    "lane",
    "sector",
    "area",
    "colony",
    "nagar",
    "village",
    "taluka",
    "district",
    "mandalam",
    "veedhi",
];

/// Labeled fragments that may continue an address line.
const REGION_LABELS: &[&str] = &["state:", "district:", "vtc:"];

// Captures up to the next personal-details line or the end of the line.
const UNTIL_PERSONAL_INFO: &str = r"(?:\n\s*Name|\n\s*DOB|\n\s*Gender|\n\s*Aadhaar|\n\s*Mobile|$)";

lazy_static! {
    pub static ref ADDRESS_LABELS: RuleSet = RuleSet::new(
        "address",
        vec![
            label_rule("care_of", "C/O"),
            label_rule("door_no", "Door No"),
            label_rule("address", "Address"),
            label_rule("residential_address", "Residential Address"),
            label_rule("permanent_address", "Permanent Address"),
            label_rule("address_telugu", "చిరునామా"),
        ],
    );
}

fn label_rule(name: &'static str, label: &str) -> Rule {
    let pattern = format!(r"(?ims){}[\s:]*([A-Za-z0-9\s,.-]+?){}", label, UNTIL_PERSONAL_INFO);
    Rule::with_normalizer(name, &pattern, collapsed)
}

fn has_personal_info_marker(lower: &str) -> bool {
    PERSONAL_INFO_MARKERS.iter().any(|m| lower.contains(m))
}

/// Extract the holder's address, or an empty string.
pub fn extract_address(text: &str) -> String {
    let from_block = clean_address(&to_block_lines(text));
    if !from_block.is_empty() {
        return from_block;
    }

    if let Some(m) = ADDRESS_LABELS.first_match(text) {
        return clean_address(&[m.value.as_str()]);
    }

    clean_address(&keyword_scan_lines(text))
}

/// Lines after a `To` line, up to the first personal-details marker.
fn to_block_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut in_address = false;

    for line in text.split('\n') {
        let line = line.trim();
        let lower = line.to_lowercase();

        if lower == "to" {
            in_address = true;
            continue;
        }
        if !in_address {
            continue;
        }
        if has_personal_info_marker(&lower) {
            break;
        }
        if !line.is_empty() && lower != "government of india" {
            lines.push(line);
        }
    }

    lines
}

/// Lines from the first address-keyword line until a PIN code line
/// (inclusive) or personal details.
fn keyword_scan_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut in_address = false;

    for line in text.split('\n') {
        let line = line.trim();
        let lower = line.to_lowercase();

        if ADDRESS_KEYWORDS.iter().any(|k| lower.contains(k)) {
            in_address = true;
            lines.push(line);
            continue;
        }
        if !in_address || line.is_empty() {
            continue;
        }
        if has_personal_info_marker(&lower) || lower.contains("qr code") {
            break;
        }
        if PIN_RUN.is_match(line) {
            lines.push(line);
            break;
        }
        if (ADDRESS_LINE.is_match(line) && line.chars().count() > 2)
            || REGION_LABELS.iter().any(|l| lower.contains(l))
        {
            lines.push(line);
        } else {
            break;
        }
    }

    lines
}

/// Join address lines and strip OCR noise from the edges.
fn clean_address(lines: &[&str]) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let joined = collapse_whitespace(&lines.join(" "));
    let address = joined.trim_end_matches([',', ' ']);

    let address = LEADING_NON_ALNUM.replace(address, "");
    let address = LEADING_SHORT_CAPS.replace(&address, "");
    let address = LEADING_NON_WORD.replace(&address, "");
    let address = LEADING_JUNK_TOKEN.replace(&address, "");
    address.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_block() {
        let text = "Government of India\nTo\nXX 12-3-45, Gandhi Nagar,\nVijayawada, Krishna,\nAndhra Pradesh - 520003\nMobile: 9876543210";
        assert_eq!(
            extract_address(text),
            "12-3-45, Gandhi Nagar, Vijayawada, Krishna, Andhra Pradesh - 520003"
        );
    }

    #[test]
    fn test_label_pattern() {
        let text = "Unique Identification\nAddress: 14 MG Road, Bengaluru\nDOB: 01/01/1990";
        assert_eq!(extract_address(text), "14 MG Road, Bengaluru");
    }

    #[test]
    fn test_label_pattern_is_cleaned() {
        let text = "Address: 14 MG Road,\nDOB: 01/01/1990";
        assert_eq!(extract_address(text), "14 MG Road");

        let text = "Permanent Address: 22 Lake View ,  \nGender: Female";
        assert_eq!(extract_address(text), "22 Lake View");
    }

    #[test]
    fn test_telugu_label() {
        let text = "చిరునామా: 5-6 Main Bazar, Guntur\nGender: Male";
        assert_eq!(extract_address(text), "5-6 Main Bazar, Guntur");
    }

    #[test]
    fn test_keyword_scan_stops_at_pin() {
        let text = "Ravi Kumar\nS/O Suresh, Door #7 Temple Street\nNear Bus Stand\nHyderabad 500001\nVTC: Ameerpet";
        assert_eq!(
            extract_address(text),
            "S/O Suresh, Door #7 Temple Street Near Bus Stand Hyderabad 500001"
        );
    }

    #[test]
    fn test_keyword_scan_stops_at_marker() {
        let text = "Plot 9, Lake Colony\nWarangal\nAadhaar 1234 5678 9012";
        assert_eq!(extract_address(text), "Plot 9, Lake Colony Warangal");
    }

    #[test]
    fn test_clean_address_noise() {
        assert_eq!(clean_address(&["** AB 4 Park Lane,", " Chennai , "]), "4 Park Lane, Chennai");
        assert_eq!(clean_address(&[]), "");
    }

    #[test]
    fn test_no_address() {
        assert_eq!(extract_address("Ravi Kumar\nDOB: 01/01/1990"), "");
    }
}
