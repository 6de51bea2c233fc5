// Single source of truth for all default values.

// --- Vector store ---
pub const DEFAULT_QDRANT_COLLECTION: &str = "mini_rag_gemini";
pub const DEFAULT_VECTOR_STORE_TIMEOUT_SECS: u64 = 30;

// --- Rerank ---
pub const DEFAULT_RERANK_MODEL: &str = "rerank";
pub const DEFAULT_RERANK_ENDPOINT: &str = "https://api.cohere.com/v1/rerank";
pub const DEFAULT_RERANK_TIMEOUT_SECS: u64 = 30;

// --- Retrieval ---
pub const DEFAULT_TOPK_VECTOR: usize = 12;
pub const DEFAULT_MMR_K: usize = 8;
pub const DEFAULT_RERANK_TOP_K: usize = 5;
pub const DEFAULT_MMR_LAMBDA: f64 = 0.5;

// --- Similarity ---
pub const SIMILARITY_EPSILON: f64 = 1e-8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
pub const LOG_ENV_VAR: &str = "SIFT_LOG";
pub const DEFAULT_MAX_TRACKED_DEGRADATIONS: usize = 1024;
