//! Index document assembly.
//!
//! # Responsibility
//! - Collect month sections in visiting order.
//! - Render the Markdown index text.
//!
//! # Invariants
//! - One `## <year>-<MM> ##` header per month folder, followed by its
//!   document links and one blank line.
//! - Years without month folders contribute nothing.
//! - Titles and paths are inserted verbatim; Markdown-special characters are
//!   not escaped.

use crate::model::entry::{DocumentEntry, MonthEntry};
use crate::model::month::Month;
use serde::{Deserialize, Serialize};

/// Fixed name of the generated index at the scan root.
pub const INDEX_FILE_NAME: &str = "README.md";
pub const DEFAULT_HEADING: &str = "FunnyStories";
pub const DEFAULT_TAGLINE: &str = "Anything interesting!";

/// Order in which month folders of one year are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOrder {
    /// Jan..Dec.
    #[default]
    Chronological,
    /// By folder name, so `Apr` precedes `Jan`.
    Lexical,
}

/// Rendering options for the index document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    pub heading: String,
    pub tagline: String,
    pub month_order: MonthOrder,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            month_order: MonthOrder::default(),
        }
    }
}

/// Sorts month folders in place according to `order`.
///
/// Chronological order is stable and breaks ties (e.g. `Mar` and `mar`
/// side by side) by folder name.
pub fn order_month_entries(entries: &mut [MonthEntry], order: MonthOrder) {
    match order {
        MonthOrder::Chronological => {
            entries.sort_by(|left, right| {
                left.month
                    .cmp(&right.month)
                    .then_with(|| left.name.cmp(&right.name))
            });
        }
        MonthOrder::Lexical => entries.sort_by(|left, right| left.name.cmp(&right.name)),
    }
}

/// One `## <year>-<MM> ##` block of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSection {
    pub year: String,
    pub month: Month,
    pub documents: Vec<DocumentEntry>,
}

impl MonthSection {
    /// Header label, e.g. `2023-03`.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month.number())
    }
}

/// Accumulates sections and renders the index text.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    options: IndexOptions,
    sections: Vec<MonthSection>,
}

impl IndexBuilder {
    pub fn new(options: IndexOptions) -> Self {
        Self {
            options,
            sections: Vec::new(),
        }
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Appends one section; sections render in push order.
    pub fn push_section(&mut self, section: MonthSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[MonthSection] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<MonthSection> {
        self.sections
    }

    /// Renders the full index document.
    pub fn render(&self) -> String {
        let mut out = format!("# {}\n{}\n\n", self.options.heading, self.options.tagline);
        for section in &self.sections {
            out.push_str(&format!("## {} ##\n", section.label()));
            for document in &section.documents {
                out.push_str(&format!(
                    "* [{}]({})\n",
                    document.title,
                    document.relative_path.display()
                ));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{order_month_entries, IndexBuilder, IndexOptions, MonthOrder, MonthSection};
    use crate::model::entry::{DocumentEntry, MonthEntry};
    use crate::model::month::Month;
    use std::path::{Path, PathBuf};

    fn month_entry(name: &str) -> MonthEntry {
        MonthEntry {
            month: Month::parse_abbreviation(name).unwrap(),
            name: name.to_string(),
            path: PathBuf::from(name),
        }
    }

    fn names(entries: &[MonthEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn empty_index_has_only_preamble() {
        let builder = IndexBuilder::new(IndexOptions::default());
        assert_eq!(builder.render(), "# FunnyStories\nAnything interesting!\n\n");
    }

    #[test]
    fn renders_sections_with_zero_padded_month() {
        let mut builder = IndexBuilder::new(IndexOptions::default());
        builder.push_section(MonthSection {
            year: "2023".to_string(),
            month: Month::Mar,
            documents: vec![
                DocumentEntry {
                    title: "My Trip".to_string(),
                    relative_path: Path::new("2023").join("Mar").join("story.md"),
                },
                DocumentEntry {
                    title: "Untitled".to_string(),
                    relative_path: Path::new("2023").join("Mar").join("zeta.md"),
                },
            ],
        });
        builder.push_section(MonthSection {
            year: "2023".to_string(),
            month: Month::Nov,
            documents: Vec::new(),
        });

        let expected = format!(
            "# FunnyStories\nAnything interesting!\n\n## 2023-03 ##\n* [My Trip]({})\n* [Untitled]({})\n\n## 2023-11 ##\n\n",
            Path::new("2023").join("Mar").join("story.md").display(),
            Path::new("2023").join("Mar").join("zeta.md").display(),
        );
        assert_eq!(builder.render(), expected);
    }

    #[test]
    fn label_uses_year_folder_name_verbatim() {
        let section = MonthSection {
            year: "trips-2019".to_string(),
            month: Month::Jan,
            documents: Vec::new(),
        };
        assert_eq!(section.label(), "trips-2019-01");
    }

    #[test]
    fn chronological_order_differs_from_lexical() {
        let mut entries = vec![month_entry("Apr"), month_entry("Jan"), month_entry("Mar")];

        order_month_entries(&mut entries, MonthOrder::Chronological);
        assert_eq!(names(&entries), vec!["Jan", "Mar", "Apr"]);

        order_month_entries(&mut entries, MonthOrder::Lexical);
        assert_eq!(names(&entries), vec!["Apr", "Jan", "Mar"]);
    }

    #[test]
    fn custom_heading_and_tagline() {
        let builder = IndexBuilder::new(IndexOptions {
            heading: "Journal".to_string(),
            tagline: "Days".to_string(),
            month_order: MonthOrder::Lexical,
        });
        assert_eq!(builder.render(), "# Journal\nDays\n\n");
    }
}
