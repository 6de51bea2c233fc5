mod rerank_service;
mod retriever;
mod vector_search;

pub use rerank_service::IRerankService;
pub use retriever::IRetriever;
pub use vector_search::IVectorSearch;
