use serde::{Deserialize, Serialize};

use super::defaults;

/// Vector store (Qdrant) connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Base URL of the Qdrant REST API. Empty means not configured.
    pub url: String,
    /// Optional API key sent as the `api-key` header.
    pub api_key: Option<String>,
    /// Collection searched by retrieval.
    pub collection: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: None,
            collection: defaults::DEFAULT_QDRANT_COLLECTION.to_string(),
            timeout_secs: defaults::DEFAULT_VECTOR_STORE_TIMEOUT_SECS,
        }
    }
}
