//! condense-core
//!
//! Shared vocabulary of the summarization form: generation parameters,
//! model output records, submissions, and what gets shown back to the user.
//! No I/O and no model dependency.

pub mod models;

/// Minimum length, in characters, of extracted document text worth summarizing.
pub const MIN_DOCUMENT_CHARS: usize = 50;

/// Shown when the model returns a record without a summary field.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary available.";
