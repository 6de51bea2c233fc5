use serde::{Deserialize, Serialize};

use super::payload::Payload;

/// A raw hit as returned by a vector search collaborator, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub score: f64,
    pub vector: Option<Vec<f32>>,
    pub payload: Option<Payload>,
}

/// One vector-search hit under consideration for the evidence set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    /// Similarity to the query from the search stage (higher = more relevant).
    pub score: f64,
    /// `None` when the hit carried no usable embedding.
    pub vector: Option<Vec<f32>>,
    pub payload: Payload,
}

impl Candidate {
    pub fn new(id: impl Into<String>, score: f64, vector: Option<Vec<f32>>, payload: Payload) -> Self {
        Self {
            id: id.into(),
            score,
            vector,
            payload,
        }
    }

    /// Normalize a raw hit. A vector that is empty, non-finite, or of the wrong
    /// dimension is dropped to `None`; a non-finite score becomes `0.0`.
    pub fn from_hit(hit: SearchHit, expected_dims: Option<usize>) -> Self {
        let vector = hit.vector.filter(|v| {
            is_usable(v) && expected_dims.map_or(true, |dims| v.len() == dims)
        });
        Self {
            id: hit.id,
            score: if hit.score.is_finite() { hit.score } else { 0.0 },
            vector,
            payload: hit.payload.unwrap_or_default(),
        }
    }

    /// Whether this candidate can take part in similarity comparisons.
    pub fn has_usable_vector(&self) -> bool {
        self.vector.as_deref().is_some_and(is_usable)
    }

    pub fn text(&self) -> &str {
        self.payload.text_or_empty()
    }
}

fn is_usable(vector: &[f32]) -> bool {
    !vector.is_empty() && vector.iter().all(|x| x.is_finite())
}
