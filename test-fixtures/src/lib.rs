//! Test fixture loader for sift golden retrieval scenarios.
//!
//! Provides typed deserialization of the scenario JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read fixture dir {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Load every scenario under `golden/retrieval`.
pub fn retrieval_scenarios() -> Vec<RetrievalScenario> {
    list_fixtures("golden/retrieval")
        .iter()
        .map(|path| {
            let relative = path
                .strip_prefix(fixtures_root())
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();
            load_fixture(&relative)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Typed fixtures
// ---------------------------------------------------------------------------

/// One raw vector-search hit in a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureHit {
    pub id: String,
    pub score: f64,
    #[serde(default)]
    pub vector: Option<Vec<f32>>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// How the scripted rerank service behaves.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixtureReranker {
    /// No rerank service configured.
    None,
    /// Scores documents so that the last one ranks first.
    Reverse,
    /// Every call fails.
    Fail,
    /// Fixed `(index, score)` answers.
    Scores { results: Vec<(usize, f64)> },
}

/// Pipeline limits for a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureParams {
    pub topk: usize,
    pub mmr_k: usize,
    pub rerank_topk: usize,
    pub lambda: f64,
}

/// A golden end-to-end retrieval scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub query_text: String,
    pub query_vector: Vec<f32>,
    pub params: FixtureParams,
    pub hits: Vec<FixtureHit>,
    pub reranker: FixtureReranker,
    pub expected_ids: Vec<String>,
    /// `no_hits`, `no_eligible_candidates`, `reranked`, or `mmr_fallback`.
    pub expected_stage: String,
}
