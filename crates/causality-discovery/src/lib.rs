//! # causality-discovery
//!
//! Infers which feature of a sampled situation causes a hit by discretizing
//! each feature into buckets and checking whether hit and non-hit buckets
//! separate cleanly.
//!
//! Pipeline per hit: generator → experience → classify (per feature) →
//! partition test → interval formatting → report.

pub mod analysis;
pub mod buckets;
pub mod engine;
pub mod experience;
pub mod generator;
pub mod intervals;
pub mod pattern;
pub mod report;

pub use analysis::{analyze, Analysis, FeatureAnalysis, Verdict};
pub use engine::{DiscoveryEngine, RunSummary, SeededEngine};
pub use experience::Experience;
pub use generator::{RandomSituations, ScriptedSituations, SituationSource};
pub use pattern::{BucketTag, Pattern};
pub use report::HitReport;
