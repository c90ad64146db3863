//! Test fixture loader for the causality golden datasets.
//!
//! Fixtures live in `golden/` next to this crate's manifest and are addressed
//! by paths relative to that directory, e.g. `discovery/partition_patterns.json`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
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

/// One partition-test case: a pattern string and whether it is clean.
#[derive(Debug, Clone, Deserialize)]
pub struct PartitionCase {
    pub pattern: String,
    pub partitioned: bool,
    #[serde(default)]
    pub note: String,
}

/// One interval-formatting case.
#[derive(Debug, Clone, Deserialize)]
pub struct IntervalCase {
    pub buckets: Vec<i64>,
    pub quantum: f64,
    pub expected: String,
}

/// One scripted run: coordinates fed to the engine and the verdict after the
/// final hit.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedRunCase {
    pub name: String,
    pub collision_radius: f64,
    pub stop_at_hit: u32,
    pub points: Vec<(f64, f64)>,
    pub expected_samples: u64,
    /// Feature name of the sole cause, or `null` when ambiguous.
    pub expected_cause: Option<String>,
    pub expected_hypotheses: Vec<String>,
    /// Feature name → pattern string after the final hit.
    pub expected_patterns: BTreeMap<String, String>,
    #[serde(default)]
    pub expected_intervals: Option<String>,
}

pub fn partition_cases() -> Vec<PartitionCase> {
    load_fixture("discovery/partition_patterns.json")
}

pub fn interval_cases() -> Vec<IntervalCase> {
    load_fixture("discovery/intervals.json")
}

pub fn scripted_runs() -> Vec<ScriptedRunCase> {
    load_fixture("discovery/scripted_runs.json")
}
