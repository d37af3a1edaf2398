//! Display title extraction for documents.
//!
//! # Responsibility
//! - Find the first `# <text> #` heading line of a document.
//!
//! # Invariants
//! - Only the first matching line counts; reading stops there.
//! - A document without a matching line is titled [`UNTITLED`].

use crate::error::{OrganizeError, OrganizeResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Title used when no heading line matches.
pub const UNTITLED: &str = "Untitled";

// Anchored at the start only: `# a # b` yields `a`, `# a # b #` yields `a # b`.
static TITLE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^# (.+) #").expect("valid title line regex"));

/// Extracts the title text from one line, if the line is a title heading.
///
/// The line is whitespace-trimmed before matching and the captured text is
/// trimmed again.
pub fn title_from_line(line: &str) -> Option<&str> {
    TITLE_LINE_RE
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Scans `reader` line by line and returns the first title found.
pub fn extract_title<R: BufRead>(reader: R) -> io::Result<String> {
    for line in reader.lines() {
        if let Some(title) = title_from_line(&line?) {
            return Ok(title.to_string());
        }
    }
    Ok(UNTITLED.to_string())
}

/// Reads the title of the document at `path`.
///
/// # Errors
/// - Returns [`OrganizeError::Io`] when the file cannot be opened, or when a
///   read or UTF-8 decoding error happens before a title line is found.
pub fn read_title(path: &Path) -> OrganizeResult<String> {
    let file = File::open(path).map_err(|err| OrganizeError::io("open", path, err))?;
    extract_title(BufReader::new(file)).map_err(|err| OrganizeError::io("read", path, err))
}
