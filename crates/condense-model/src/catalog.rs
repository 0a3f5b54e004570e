//! The models a user can pick from.
//!
//! Entries are written `provider:model_id`, e.g.
//! `huggingface:facebook/bart-large-cnn` or
//! `bedrock:us.anthropic.claude-haiku-4-5-20251001-v1:0`. Only the first colon
//! separates the provider, so Bedrock version suffixes survive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;

/// The model offered when nothing else is configured.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    HuggingFace,
    Bedrock,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::HuggingFace => "huggingface",
            Provider::Bedrock => "bedrock",
        }
    }
}

impl FromStr for Provider {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Provider::HuggingFace),
            "bedrock" => Ok(Provider::Bedrock),
            other => Err(SummarizeError::Config(format!("unknown provider: {other}"))),
        }
    }
}

/// One selectable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelChoice {
    pub provider: Provider,
    pub model_id: String,
}

impl FromStr for ModelChoice {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (provider, model_id) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| SummarizeError::Config(format!("expected provider:model_id, got {s:?}")))?;

        let model_id = model_id.trim();
        if model_id.is_empty() {
            return Err(SummarizeError::Config(format!("missing model id in {s:?}")));
        }

        Ok(ModelChoice {
            provider: provider.parse()?,
            model_id: model_id.to_string(),
        })
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider.as_str(), self.model_id)
    }
}

/// Ordered, non-empty list of selectable models. The first is the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelCatalog {
    models: Vec<ModelChoice>,
}

impl ModelCatalog {
    pub fn new(models: Vec<ModelChoice>) -> Result<Self, SummarizeError> {
        if models.is_empty() {
            return Err(SummarizeError::Config("model catalog is empty".to_string()));
        }
        // Lookups key on the model id alone, so one id cannot sit under two providers.
        for (i, choice) in models.iter().enumerate() {
            if models[..i].iter().any(|m| m.model_id == choice.model_id) {
                return Err(SummarizeError::Config(format!(
                    "duplicate model id: {}",
                    choice.model_id
                )));
            }
        }
        Ok(Self { models })
    }

    /// Parse a comma-separated list of `provider:model_id` entries.
    /// Blank entries are skipped.
    pub fn parse_list(list: &str) -> Result<Self, SummarizeError> {
        let models = list
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<ModelChoice>, _>>()?;
        Self::new(models)
    }

    pub fn models(&self) -> &[ModelChoice] {
        &self.models
    }

    pub fn default_model(&self) -> &ModelChoice {
        &self.models[0]
    }

    pub fn find(&self, model_id: &str) -> Option<&ModelChoice> {
        self.models.iter().find(|m| m.model_id == model_id)
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            models: vec![ModelChoice {
                provider: Provider::HuggingFace,
                model_id: DEFAULT_MODEL.to_string(),
            }],
        }
    }
}
