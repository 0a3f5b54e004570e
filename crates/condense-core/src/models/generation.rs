use serde::{Deserialize, Serialize};

/// Decoding options passed to the summarization model on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Upper bound on generated summary length, in model tokens.
    pub max_length: u32,
    /// Lower bound on generated summary length, in model tokens.
    pub min_length: u32,
    /// `false` selects deterministic decoding.
    pub do_sample: bool,
}

impl GenerationParams {
    /// The fixed configuration every submission is summarized with.
    pub const SUMMARY: GenerationParams = GenerationParams {
        max_length: 150,
        min_length: 30,
        do_sample: false,
    };
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::SUMMARY
    }
}
