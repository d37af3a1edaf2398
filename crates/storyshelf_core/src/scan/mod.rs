//! Directory discovery and name classification.
//!
//! # Responsibility
//! - Decide which root-level directories are years and which year
//!   subdirectories are months.
//! - List directory children in deterministic lexicographic order.
//!
//! # Invariants
//! - Only year directories are descended into.
//! - Unrecognized names are skipped, never reported as errors.

pub mod classify;
mod scanner;

pub use scanner::{list_documents, scan_month_entries, scan_year_entries};
