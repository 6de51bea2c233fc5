//! Wire types for the rerank endpoint.

use serde::{Deserialize, Serialize};
use sift_core::errors::{RerankError, SiftResult};
use sift_core::models::RerankResult;

/// Rerank request body. Every document is scored; truncation happens downstream.
#[derive(Debug, Clone, Serialize)]
pub struct RerankRequest<'a> {
    pub model: &'a str,
    pub query: &'a str,
    pub documents: &'a [String],
}

#[derive(Debug, Deserialize)]
struct RerankResponse {
    results: Vec<RerankResult>,
}

/// Decode a response body. Results keep the service's order; validation of
/// indices and scores is left to the caller.
pub fn parse_rerank_response(body: &str) -> SiftResult<Vec<RerankResult>> {
    let response: RerankResponse =
        serde_json::from_str(body).map_err(|e| RerankError::MalformedResponse {
            reason: e.to_string(),
        })?;
    Ok(response.results)
}
