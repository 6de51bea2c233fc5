pub mod defaults;
mod observability_config;
mod rerank_config;
mod retrieval_config;
mod vector_store_config;

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use rerank_config::RerankConfig;
pub use retrieval_config::{RetrievalConfig, ScoreNormalization};
pub use vector_store_config::VectorStoreConfig;

use crate::errors::{ConfigError, SiftResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub vector_store: VectorStoreConfig,
    pub rerank: RerankConfig,
    pub retrieval: RetrievalConfig,
    pub observability: ObservabilityConfig,
}

impl SiftConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> SiftResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> SiftResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseFailed {
            reason: format!("{}: {e}", path.display()),
        })?;
        let mut config = Self::from_toml(&source)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> SiftResult<Self> {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay values from an environment-style lookup. Blank values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> SiftResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = get("QDRANT_URL") {
            self.vector_store.url = url;
        }
        if let Some(key) = get("QDRANT_API_KEY") {
            self.vector_store.api_key = Some(key);
        }
        if let Some(collection) = get("QDRANT_COLLECTION") {
            self.vector_store.collection = collection;
        }
        if let Some(key) = get("COHERE_API_KEY") {
            self.rerank.api_key = Some(key);
        }
        if let Some(model) = get("RERANK_MODEL") {
            self.rerank.model = model;
        }
        if let Some(v) = get("TOPK_VECTOR") {
            self.retrieval.topk_vector = parse_env("TOPK_VECTOR", &v)?;
        }
        if let Some(v) = get("MMR_K") {
            self.retrieval.mmr_k = parse_env("MMR_K", &v)?;
        }
        if let Some(v) = get("RERANK_TOPK") {
            self.retrieval.rerank_top_k = parse_env("RERANK_TOPK", &v)?;
        }
        if let Some(v) = get("MMR_LAMBDA") {
            self.retrieval.mmr_lambda = parse_env("MMR_LAMBDA", &v)?;
        }

        self.validate()
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> SiftResult<()> {
        let retrieval = &self.retrieval;
        if !retrieval.mmr_lambda.is_finite() || !(0.0..=1.0).contains(&retrieval.mmr_lambda) {
            return Err(invalid("retrieval.mmr_lambda", "must be within [0, 1]"));
        }
        if retrieval.topk_vector == 0 {
            return Err(invalid("retrieval.topk_vector", "must be positive"));
        }
        if retrieval.mmr_k == 0 {
            return Err(invalid("retrieval.mmr_k", "must be positive"));
        }
        if retrieval.rerank_top_k == 0 {
            return Err(invalid("retrieval.rerank_top_k", "must be positive"));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> SiftResult<T>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| {
        ConfigError::InvalidValue {
            field: key.to_string(),
            reason: format!("{value:?}: {e}"),
        }
        .into()
    })
}

fn invalid(field: &str, reason: &str) -> crate::errors::SiftError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
