use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Passage payload stored alongside a vector: `text` plus optional metadata
/// (`title`, `source`, `position`) and anything else the indexer attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The passage content.
    pub fn text(&self) -> Option<&str> {
        self.get_str("text")
    }

    /// Passage content, or `""` when missing or not a string.
    pub fn text_or_empty(&self) -> &str {
        self.text().unwrap_or("")
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    pub fn source(&self) -> Option<&str> {
        self.get_str("source")
    }

    /// Chunk position within its source document.
    pub fn position(&self) -> Option<u64> {
        self.0.get("position").and_then(Value::as_u64)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
