//! Summarization through the Bedrock Converse API.
//!
//! Bedrock chat models have no summarization head, so the generation options
//! are expressed as a system prompt plus `maxTokens`. Sampling disabled maps
//! to temperature 0.

use std::future::Future;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;

use condense_core::models::generation::GenerationParams;
use condense_core::models::summary::SummaryRecord;

use crate::error::SummarizeError;
use crate::summarizer::Summarizer;

pub const DEFAULT_REGION: &str = "us-east-1";

pub struct BedrockSummarizer {
    client: Client,
    model_id: String,
}

impl BedrockSummarizer {
    pub fn new(config: &aws_config::SdkConfig, model_id: &str) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.to_string(),
        }
    }

    /// Load the default credential chain for `region` and build a summarizer.
    pub async fn from_region(region: &str, model_id: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;
        Self::new(&config, model_id)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl Summarizer for BedrockSummarizer {
    fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<Vec<SummaryRecord>, SummarizeError>> + Send {
        let prompt = system_prompt(params);
        let inference = inference_config(params);
        let text = text.to_string();

        async move {
            info!(model_id = %self.model_id, text_len = text.len(), "invoking bedrock summarization");

            let message = Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(text))
                .build()
                .map_err(|e| SummarizeError::Invocation(e.to_string()))?;

            let response = self
                .client
                .converse()
                .model_id(&self.model_id)
                .system(SystemContentBlock::Text(prompt))
                .messages(message)
                .inference_config(inference)
                .send()
                .await
                .map_err(|e| SummarizeError::Invocation(e.into_service_error().to_string()))?;

            let output_message = response
                .output()
                .and_then(|o| o.as_message().ok())
                .ok_or_else(|| SummarizeError::ResponseParse("no message in response".to_string()))?;

            let summary = output_message
                .content()
                .iter()
                .filter_map(|block| {
                    if let ContentBlock::Text(t) = block {
                        Some(t.as_str())
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join("");

            if summary.trim().is_empty() {
                return Ok(Vec::new());
            }

            Ok(vec![SummaryRecord::new(summary.trim())])
        }
    }
}

pub fn system_prompt(params: &GenerationParams) -> String {
    format!(
        "Summarize the text the user sends. Reply with the summary only, \
         no preamble. Use between {} and {} tokens.",
        params.min_length, params.max_length
    )
}

pub fn inference_config(params: &GenerationParams) -> InferenceConfiguration {
    let max_tokens = i32::try_from(params.max_length).unwrap_or(i32::MAX);
    let builder = InferenceConfiguration::builder().max_tokens(max_tokens);
    if params.do_sample {
        builder.build()
    } else {
        builder.temperature(0.0).build()
    }
}
