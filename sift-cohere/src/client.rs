//! Blocking Cohere rerank client.

use std::time::Duration;

use sift_core::config::RerankConfig;
use sift_core::errors::{RerankError, SiftError, SiftResult};
use sift_core::models::RerankResult;
use sift_core::traits::IRerankService;
use tracing::debug;

use crate::protocol::{self, RerankRequest};

fn request_err(e: reqwest::Error) -> SiftError {
    RerankError::RequestFailed {
        reason: e.to_string(),
    }
    .into()
}

/// Cohere-backed [`IRerankService`].
#[derive(Debug)]
pub struct CohereReranker {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl CohereReranker {
    /// Build a client when an API key is configured; `Ok(None)` otherwise.
    pub fn from_config(config: &RerankConfig) -> SiftResult<Option<Self>> {
        let Some(api_key) = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
        else {
            debug!("no rerank api key, reranking disabled");
            return Ok(None);
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(request_err)?;

        Ok(Some(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: api_key.to_string(),
        }))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IRerankService for CohereReranker {
    fn score_documents(&self, query: &str, documents: &[String]) -> SiftResult<Vec<RerankResult>> {
        let body = RerankRequest {
            model: &self.model,
            query,
            documents,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(request_err)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RerankError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = response.text().map_err(request_err)?;
        let results = protocol::parse_rerank_response(&text)?;
        debug!(model = %self.model, documents = documents.len(), results = results.len(), "cohere rerank");
        Ok(results)
    }

    fn name(&self) -> &str {
        "cohere"
    }
}
