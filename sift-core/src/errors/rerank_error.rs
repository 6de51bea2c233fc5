/// Rerank service errors. Absorbed by the reranker adapter, never surfaced
/// from a retrieval call.
#[derive(Debug, thiserror::Error)]
pub enum RerankError {
    #[error("rerank service not configured")]
    NotConfigured,

    #[error("rerank request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("rerank service returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed rerank response: {reason}")]
    MalformedResponse { reason: String },
}
