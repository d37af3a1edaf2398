//! Year, month and document entries discovered under the scan root.

use super::month::Month;
use serde::Serialize;
use std::path::PathBuf;

/// Root-level directory holding one year of notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearEntry {
    /// Directory name as found on disk, e.g. `2023` or `2023_trips`.
    pub name: String,
    /// Absolute or root-joined path to the directory.
    pub path: PathBuf,
}

/// Month subdirectory of a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthEntry {
    pub month: Month,
    /// Directory name as found on disk; may differ in case from the
    /// canonical abbreviation (`mar` vs `Mar`).
    pub name: String,
    pub path: PathBuf,
}

/// One indexed Markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEntry {
    /// First `# <text> #` heading, or `Untitled`.
    pub title: String,
    /// Path relative to the scan root: `<year>/<month>/<file>`.
    pub relative_path: PathBuf,
}
