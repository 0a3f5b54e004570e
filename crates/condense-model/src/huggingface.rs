//! Hosted inference API summarization (`POST {base_url}/{model_id}`).
//!
//! The request carries the text as `inputs` and the generation options under
//! `parameters`; a summarization model answers with
//! `[{"summary_text": "..."}]`.

use std::future::Future;

use serde_json::{Value, json};
use tracing::{debug, info};

use condense_core::models::generation::GenerationParams;
use condense_core::models::summary::SummaryRecord;

use crate::error::SummarizeError;
use crate::summarizer::Summarizer;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuggingFaceSettings {
    pub base_url: String,
    pub api_token: Option<String>,
}

impl Default for HuggingFaceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INFERENCE_URL.to_string(),
            api_token: None,
        }
    }
}

pub struct HuggingFaceSummarizer {
    agent: ureq::Agent,
    model_id: String,
    endpoint: String,
    api_token: Option<String>,
}

impl HuggingFaceSummarizer {
    pub fn new(model_id: &str, settings: &HuggingFaceSettings) -> Self {
        Self {
            // Error statuses are read like any other answer so their body
            // reaches the caller.
            agent: ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .into(),
            model_id: model_id.to_string(),
            endpoint: endpoint_url(&settings.base_url, model_id),
            api_token: settings.api_token.clone(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Summarizer for HuggingFaceSummarizer {
    fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<Vec<SummaryRecord>, SummarizeError>> + Send {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let api_token = self.api_token.clone();
        let body = request_body(text, params);
        let model_id = self.model_id.clone();
        let text_len = text.len();

        async move {
            info!(model_id = %model_id, text_len, "invoking inference endpoint");

            // ureq is blocking; keep it off the async workers.
            let value = tokio::task::spawn_blocking(move || -> Result<Value, SummarizeError> {
                let mut request = agent.post(&endpoint);
                if let Some(token) = api_token {
                    request = request.header("Authorization", format!("Bearer {token}"));
                }
                let mut response = request
                    .send_json(&body)
                    .map_err(|e| SummarizeError::Invocation(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    let text = response.body_mut().read_to_string().unwrap_or_default();
                    return Err(SummarizeError::Invocation(error_detail(
                        status.as_u16(),
                        &text,
                    )));
                }

                response
                    .body_mut()
                    .read_json::<Value>()
                    .map_err(|e| SummarizeError::ResponseParse(e.to_string()))
            })
            .await
            .map_err(|e| SummarizeError::Invocation(e.to_string()))??;

            parse_response(value)
        }
    }
}

/// `{base_url}/{model_id}` with exactly one slash between the parts.
pub fn endpoint_url(base_url: &str, model_id: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        model_id.trim_start_matches('/')
    )
}

pub fn request_body(text: &str, params: &GenerationParams) -> Value {
    json!({
        "inputs": text,
        "parameters": {
            "max_length": params.max_length,
            "min_length": params.min_length,
            "do_sample": params.do_sample,
        },
    })
}

/// The message carried by a non-2xx answer: its JSON `error` field, else the
/// raw body, else just the status.
pub fn error_detail(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string));

    match from_json {
        Some(error) => error,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("http status: {status}"),
    }
}

/// Decode the endpoint's answer.
///
/// A JSON array is decoded record by record; elements that are not records
/// are skipped. Any other shape (an object, a string, null) is treated as
/// "no records" rather than an error.
pub fn parse_response(value: Value) -> Result<Vec<SummaryRecord>, SummarizeError> {
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    let records = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<SummaryRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "skipping non-record element");
                None
            }
        })
        .collect();

    Ok(records)
}
