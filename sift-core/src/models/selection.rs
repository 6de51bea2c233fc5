use serde::{Deserialize, Serialize};

use super::candidate::Candidate;

/// Why a candidate was left out of MMR's working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No vector, an empty one, or one with non-finite components.
    MissingVector,
    /// Vector length differs from the rest of the pool.
    DimensionMismatch,
    /// Another candidate with the same id came first.
    DuplicateId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCandidate {
    pub id: String,
    pub reason: SkipReason,
}

/// Ordered MMR output. `selected` is in selection order and has unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub selected: Vec<Candidate>,
    pub skipped: Vec<SkippedCandidate>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.selected.iter().map(|c| c.id.as_str()).collect()
    }
}
