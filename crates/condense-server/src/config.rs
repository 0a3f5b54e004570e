//! Server configuration, read once at startup from the environment.

use std::net::SocketAddr;

use thiserror::Error;

use condense_model::backend::BackendLoader;
use condense_model::bedrock::DEFAULT_REGION;
use condense_model::catalog::ModelCatalog;
use condense_model::huggingface::{DEFAULT_INFERENCE_URL, HuggingFaceSettings};

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// 200 MiB, the usual ceiling for form uploads.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub catalog: ModelCatalog,
    pub max_upload_bytes: usize,
    pub huggingface: HuggingFaceSettings,
    pub aws_region: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("CONDENSE_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "CONDENSE_BIND",
                reason: e.to_string(),
            })?;

        let catalog = match get("CONDENSE_MODELS") {
            Some(list) => ModelCatalog::parse_list(&list).map_err(|e| ConfigError::Invalid {
                var: "CONDENSE_MODELS",
                reason: e.to_string(),
            })?,
            None => ModelCatalog::default(),
        };

        let max_upload_bytes = match get("CONDENSE_MAX_UPLOAD_BYTES") {
            Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: "CONDENSE_MAX_UPLOAD_BYTES",
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let huggingface = HuggingFaceSettings {
            base_url: get("HF_INFERENCE_URL").unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string()),
            api_token: get("HF_API_TOKEN"),
        };

        let aws_region = get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self {
            bind_addr,
            catalog,
            max_upload_bytes,
            huggingface,
            aws_region,
        })
    }

    pub fn loader(&self) -> BackendLoader {
        BackendLoader {
            catalog: self.catalog.clone(),
            huggingface: self.huggingface.clone(),
            aws_region: self.aws_region.clone(),
        }
    }
}
