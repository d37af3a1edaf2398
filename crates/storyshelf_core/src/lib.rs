//! Core logic for storyshelf, a dated Markdown notes organizer.
//! Scans year folders, buckets loose notes by month and regenerates the
//! root `README.md` index.

pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod relocate;
pub mod scan;
pub mod service;
pub mod title;

pub use error::{OrganizeError, OrganizeResult};
pub use index::{IndexBuilder, IndexOptions, MonthOrder, MonthSection, INDEX_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LogSink};
pub use model::entry::{DocumentEntry, MonthEntry, YearEntry};
pub use model::month::Month;
pub use relocate::{ModifiedTimeResolver, MonthResolver, Relocation};
pub use service::organizer::{Organizer, RunReport, SectionSummary};
pub use title::{extract_title, read_title, UNTITLED};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
