//! condense-model
//!
//! The summarization capability: the `Summarizer` seam, hosted backends,
//! the selectable model catalog, and the process-wide model registry.

pub mod backend;
pub mod bedrock;
pub mod catalog;
pub mod error;
pub mod huggingface;
pub mod registry;
pub mod summarizer;

pub use summarizer::Summarizer;
