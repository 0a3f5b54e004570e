use serde::{Deserialize, Serialize};

use crate::NO_SUMMARY_PLACEHOLDER;

/// One result record returned by a summarization model.
///
/// Hosted models return a list of objects that usually carry `summary_text`;
/// anything else they include is kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SummaryRecord {
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: Some(summary_text.into()),
            extra: serde_json::Map::new(),
        }
    }

    /// The summary, or the placeholder when the model left the field out.
    pub fn summary(&self) -> &str {
        self.summary_text.as_deref().unwrap_or(NO_SUMMARY_PLACEHOLDER)
    }
}
