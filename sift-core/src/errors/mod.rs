//! Error taxonomy. One enum per subsystem, all convertible into [`SiftError`].

mod config_error;
mod rerank_error;
mod vector_store_error;

pub use config_error::ConfigError;
pub use rerank_error::RerankError;
pub use vector_store_error::VectorStoreError;

/// Result alias used across the workspace.
pub type SiftResult<T> = Result<T, SiftError>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("vector store error: {0}")]
    VectorStoreError(#[from] VectorStoreError),

    #[error("rerank error: {0}")]
    RerankError(#[from] RerankError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("degraded mode: {component} using {fallback}")]
    DegradedMode { component: String, fallback: String },
}
