pub mod display;
pub mod generation;
pub mod submission;
pub mod summary;
