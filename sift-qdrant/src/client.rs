//! Blocking Qdrant search client.

use std::time::Duration;

use sift_core::config::VectorStoreConfig;
use sift_core::errors::{SiftError, SiftResult, VectorStoreError};
use sift_core::models::SearchHit;
use sift_core::traits::IVectorSearch;
use tracing::debug;

use crate::protocol::{self, SearchRequest};

fn request_err(e: reqwest::Error) -> SiftError {
    VectorStoreError::RequestFailed {
        reason: e.to_string(),
    }
    .into()
}

/// Qdrant-backed [`IVectorSearch`].
#[derive(Debug)]
pub struct QdrantSearch {
    client: reqwest::blocking::Client,
    endpoint: String,
    collection: String,
    api_key: Option<String>,
}

impl QdrantSearch {
    /// Build a client from config. A blank URL or collection is a
    /// configuration error, reported before any request is made.
    pub fn from_config(config: &VectorStoreConfig) -> SiftResult<Self> {
        let url = config.url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(VectorStoreError::NotConfigured {
                field: "vector_store.url".into(),
            }
            .into());
        }
        let collection = config.collection.trim();
        if collection.is_empty() {
            return Err(VectorStoreError::NotConfigured {
                field: "vector_store.collection".into(),
            }
            .into());
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(request_err)?;

        Ok(Self {
            client,
            endpoint: format!("{url}/collections/{collection}/points/search"),
            collection: collection.to_string(),
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        })
    }

    /// Full URL of the search endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl IVectorSearch for QdrantSearch {
    fn search_vectors(
        &self,
        query_vector: &[f32],
        top_k: usize,
        with_payload: bool,
    ) -> SiftResult<Vec<SearchHit>> {
        let body = SearchRequest::new(query_vector, top_k, with_payload);

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            request = request.header("api-key", key);
        }

        let response = request.send().map_err(request_err)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(VectorStoreError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = response.text().map_err(request_err)?;
        let hits = protocol::parse_search_response(&text)?;
        debug!(collection = %self.collection, hits = hits.len(), top_k, "qdrant search");
        Ok(hits)
    }

    fn name(&self) -> &str {
        "qdrant"
    }
}
