/// Vector search errors. These are caller-visible: without vector search
/// there is no retrieval at all.
#[derive(Debug, thiserror::Error)]
pub enum VectorStoreError {
    #[error("vector store not configured: missing {field}")]
    NotConfigured { field: String },

    #[error("search request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("vector store returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed search response: {reason}")]
    MalformedResponse { reason: String },
}
