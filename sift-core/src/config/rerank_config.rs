use serde::{Deserialize, Serialize};

use super::defaults;

/// Rerank service (Cohere) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankConfig {
    /// API key. Absent or blank disables reranking entirely.
    pub api_key: Option<String>,
    /// Rerank model name.
    pub model: String,
    /// Full URL of the rerank endpoint.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl RerankConfig {
    /// Whether a credential is present. Without one the reranker is never called.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: defaults::DEFAULT_RERANK_MODEL.to_string(),
            endpoint: defaults::DEFAULT_RERANK_ENDPOINT.to_string(),
            timeout_secs: defaults::DEFAULT_RERANK_TIMEOUT_SECS,
        }
    }
}
