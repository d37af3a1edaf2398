//! Use-case services over the scan, relocate and index steps.
//!
//! # Responsibility
//! - Run the full organize pipeline against one explicit root.
//! - Keep CLI code free of filesystem orchestration.

pub mod organizer;
