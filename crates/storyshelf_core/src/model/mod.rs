//! Filesystem-shaped domain model.
//!
//! # Responsibility
//! - Name the pieces of a notes tree: years, months, documents.
//! - Keep calendar month parsing in one place.
//!
//! # Invariants
//! - Entries hold no state beyond what the filesystem currently says.
//! - Document paths stored for the index are relative to the scan root.

pub mod entry;
pub mod month;
