mod candidate;
mod degradation_event;
mod payload;
mod rerank_result;
mod selection;

pub use candidate::{Candidate, SearchHit};
pub use degradation_event::DegradationEvent;
pub use payload::Payload;
pub use rerank_result::RerankResult;
pub use selection::{Selection, SkipReason, SkippedCandidate};
