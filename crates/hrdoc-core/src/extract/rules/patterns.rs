//! Common regex patterns for document field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Contact details
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).unwrap();

    pub static ref PHONE: Regex = Regex::new(
        r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]"
    ).unwrap();

    // National ID number: 4-4-4 digit groups on one line, or a plain 12-digit run
    pub static ref NATIONAL_ID_NUMBER: Regex = Regex::new(
        r"\b(\d{4}[ \t-]?\d{4}[ \t-]?\d{4}|\d{12})\b"
    ).unwrap();

    pub static ref ID_SEPARATORS: Regex = Regex::new(r"[\s-]").unwrap();

    // Six-digit PIN code anywhere in a line
    pub static ref PIN_RUN: Regex = Regex::new(r"\d{6}").unwrap();

    // Line made only of characters that appear in postal addresses
    pub static ref ADDRESS_LINE: Regex = Regex::new(r"^[A-Za-z0-9\s,./:-]+$").unwrap();

    // Line made only of letters and spaces
    pub static ref LETTERS_ONLY: Regex = Regex::new(r"^[A-Za-z\s]+$").unwrap();

    // OCR noise at the start of an address
    pub static ref LEADING_NON_ALNUM: Regex = Regex::new(r"^[^A-Za-z0-9]*").unwrap();
    pub static ref LEADING_SHORT_CAPS: Regex = Regex::new(r"^[A-Z]{1,3}\s+").unwrap();
    pub static ref LEADING_NON_WORD: Regex = Regex::new(r"^\W*").unwrap();
    pub static ref LEADING_JUNK_TOKEN: Regex = Regex::new(
        r"(?i)^(XX|ABC|DEF|GHI|JKL|MNO|PQR|STU|VWX|YZ)\s+"
    ).unwrap();
}
