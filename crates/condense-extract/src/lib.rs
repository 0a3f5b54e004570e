//! condense-extract
//!
//! Flattens uploaded DOCX documents into plain text for summarization.

pub mod docx;
pub mod error;

pub use docx::extract_text;
