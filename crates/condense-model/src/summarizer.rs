use std::future::Future;

use condense_core::models::generation::GenerationParams;
use condense_core::models::summary::SummaryRecord;

use crate::error::SummarizeError;

/// A text summarization model, invoked as a black box.
///
/// Implementations return the model's records as-is. An empty list is a
/// valid answer; deciding what it means is up to the caller.
pub trait Summarizer {
    fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<Vec<SummaryRecord>, SummarizeError>> + Send;
}
