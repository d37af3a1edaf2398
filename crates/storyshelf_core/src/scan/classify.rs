//! Name-based classification rules.

use crate::model::month::Month;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ffi::OsStr;

/// Keywords that disqualify a year directory, matched case-insensitively.
pub const EXCLUDED_KEYWORDS: &[&str] = &["temp", "working", "personal"];

/// Filename suffix of a document. Matched case-sensitively.
pub const DOCUMENT_SUFFIX: &str = ".md";

static YEAR_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}").expect("valid year digits regex"));

/// Returns whether a root-level directory name denotes a year.
///
/// Rules:
/// - name contains four consecutive ASCII digits anywhere;
/// - name contains none of [`EXCLUDED_KEYWORDS`], ignoring case.
pub fn is_year_name(name: &str) -> bool {
    YEAR_DIGITS_RE.is_match(name) && !contains_excluded_keyword(name)
}

/// Returns whether `name` contains an excluded keyword, ignoring case.
pub fn contains_excluded_keyword(name: &str) -> bool {
    let lowered = name.to_lowercase();
    EXCLUDED_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Parses a year subdirectory name as a month folder.
pub fn month_from_dir_name(name: &str) -> Option<Month> {
    Month::parse_abbreviation(name)
}

/// Returns whether a filename carries the document suffix.
pub fn is_document_name(name: &OsStr) -> bool {
    name.to_string_lossy().ends_with(DOCUMENT_SUFFIX)
}
