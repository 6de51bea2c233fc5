use serde::{Deserialize, Serialize};

/// One scored document from a rerank service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RerankResult {
    /// Position of the document in the list sent to the service.
    pub index: usize,
    /// Relevance score (higher is more relevant).
    pub relevance_score: f64,
}
