//! condense-workflow
//!
//! One submit of the summarization form: pick the input source, validate it,
//! call the model, and turn the result into something to show the user.

pub mod error;
pub mod submit;

pub use submit::{run, submit};
