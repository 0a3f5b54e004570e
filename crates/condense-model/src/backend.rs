//! Concrete summarizers selected from the catalog, and the loader that
//! builds them for the registry.

use std::future::Future;

use tracing::info;

use condense_core::models::generation::GenerationParams;
use condense_core::models::summary::SummaryRecord;

use crate::bedrock::BedrockSummarizer;
use crate::catalog::{ModelCatalog, Provider};
use crate::error::SummarizeError;
use crate::huggingface::{HuggingFaceSettings, HuggingFaceSummarizer};
use crate::registry::ModelLoader;
use crate::summarizer::Summarizer;

pub enum SummarizerBackend {
    HuggingFace(HuggingFaceSummarizer),
    Bedrock(BedrockSummarizer),
}

impl SummarizerBackend {
    pub fn provider(&self) -> Provider {
        match self {
            SummarizerBackend::HuggingFace(_) => Provider::HuggingFace,
            SummarizerBackend::Bedrock(_) => Provider::Bedrock,
        }
    }

    pub fn model_id(&self) -> &str {
        match self {
            SummarizerBackend::HuggingFace(s) => s.model_id(),
            SummarizerBackend::Bedrock(s) => s.model_id(),
        }
    }
}

impl Summarizer for SummarizerBackend {
    fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<Vec<SummaryRecord>, SummarizeError>> + Send {
        async move {
            match self {
                SummarizerBackend::HuggingFace(s) => s.summarize(text, params).await,
                SummarizerBackend::Bedrock(s) => s.summarize(text, params).await,
            }
        }
    }
}

/// Builds backends for models listed in the catalog.
#[derive(Debug, Clone)]
pub struct BackendLoader {
    pub catalog: ModelCatalog,
    pub huggingface: HuggingFaceSettings,
    pub aws_region: String,
}

impl ModelLoader for BackendLoader {
    type Model = SummarizerBackend;

    fn load(
        &self,
        model_id: &str,
    ) -> impl Future<Output = Result<SummarizerBackend, SummarizeError>> + Send {
        async move {
            let choice = self
                .catalog
                .find(model_id)
                .ok_or_else(|| SummarizeError::UnsupportedModel(model_id.to_string()))?;

            info!(model = %choice, "building summarizer");

            let backend = match choice.provider {
                Provider::HuggingFace => SummarizerBackend::HuggingFace(
                    HuggingFaceSummarizer::new(&choice.model_id, &self.huggingface),
                ),
                Provider::Bedrock => SummarizerBackend::Bedrock(
                    BedrockSummarizer::from_region(&self.aws_region, &choice.model_id).await,
                ),
            };

            info!(
                provider = backend.provider().as_str(),
                model_id = backend.model_id(),
                "summarizer ready"
            );

            Ok(backend)
        }
    }
}
