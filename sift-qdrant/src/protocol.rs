//! Wire types for `POST /collections/{name}/points/search`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sift_core::errors::{SiftResult, VectorStoreError};
use sift_core::models::{Payload, SearchHit};

/// Search request body.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub vector: &'a [f32],
    pub limit: usize,
    pub with_payload: bool,
    pub with_vector: bool,
}

impl<'a> SearchRequest<'a> {
    /// Vectors are always requested; MMR needs them.
    pub fn new(vector: &'a [f32], limit: usize, with_payload: bool) -> Self {
        Self {
            vector,
            limit,
            with_payload,
            with_vector: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    result: Vec<ScoredPoint>,
}

#[derive(Debug, Deserialize)]
struct ScoredPoint {
    id: Value,
    score: f64,
    #[serde(default)]
    payload: Option<Payload>,
    #[serde(default)]
    vector: Option<Value>,
}

impl ScoredPoint {
    fn into_hit(self) -> SiftResult<SearchHit> {
        let id = match self.id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(VectorStoreError::MalformedResponse {
                    reason: format!("unsupported point id: {other}"),
                }
                .into())
            }
        };
        Ok(SearchHit {
            id,
            score: self.score,
            vector: self.vector.and_then(dense_vector),
            payload: self.payload,
        })
    }
}

/// A plain float array, or `None` for anything else (named vectors, sparse, null).
fn dense_vector(value: Value) -> Option<Vec<f32>> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|x| x.as_f64().map(|f| f as f32))
            .collect(),
        _ => None,
    }
}

/// Decode a search response body into raw hits, in server order.
pub fn parse_search_response(body: &str) -> SiftResult<Vec<SearchHit>> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| VectorStoreError::MalformedResponse {
            reason: e.to_string(),
        })?;
    response
        .result
        .into_iter()
        .map(ScoredPoint::into_hit)
        .collect()
}
