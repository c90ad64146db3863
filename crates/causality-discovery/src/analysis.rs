//! One analysis pass over all candidate features.

use std::collections::BTreeSet;
use std::fmt;

use causality_core::{CausalityResult, DiscoveryError, Feature, QuantaConfig};
use serde::Serialize;
use tracing::debug;

use crate::buckets::classify;
use crate::experience::Experience;
use crate::intervals::{merge_runs, CauseInterval};
use crate::pattern::Pattern;

/// Outcome of the partition test for a single feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureAnalysis {
    pub feature: Feature,
    pub pattern: Pattern,
    /// Hit-only bucket indices, ascending.
    pub cause_buckets: Vec<i64>,
    pub partitioned: bool,
}

/// What a pass concluded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Exactly one feature partitions cleanly.
    Cause {
        feature: Feature,
        intervals: Vec<CauseInterval>,
    },
    /// Zero, or more than one, clean features.
    Ambiguous { hypotheses: BTreeSet<Feature> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// One entry per feature, in [`Feature::ALL`] order.
    pub features: Vec<FeatureAnalysis>,
    pub hypotheses: BTreeSet<Feature>,
    pub verdict: Verdict,
}

impl Analysis {
    pub fn feature(&self, feature: Feature) -> Option<&FeatureAnalysis> {
        self.features.iter().find(|f| f.feature == feature)
    }

    /// The single inferred cause, if there is one.
    pub fn cause(&self) -> Option<Feature> {
        match self.verdict {
            Verdict::Cause { feature, .. } => Some(feature),
            Verdict::Ambiguous { .. } => None,
        }
    }
}

/// Classify every feature over the current experience and pick the cause.
///
/// Fails with `EmptyCauseBuckets` if the sole clean feature has no hit-only
/// bucket to report.
pub fn analyze(experience: &Experience, quanta: &QuantaConfig) -> CausalityResult<Analysis> {
    let features: Vec<FeatureAnalysis> = Feature::ALL
        .iter()
        .map(|&feature| {
            let classification = classify(feature, experience, quanta.quantum(feature));
            FeatureAnalysis {
                feature,
                partitioned: classification.pattern.is_partitioned(),
                pattern: classification.pattern,
                cause_buckets: classification.cause_buckets,
            }
        })
        .collect();

    let hypotheses: BTreeSet<Feature> = features
        .iter()
        .filter(|f| f.partitioned)
        .map(|f| f.feature)
        .collect();

    let sole = match hypotheses.len() {
        1 => hypotheses.first().copied(),
        _ => None,
    };
    let verdict = match sole {
        Some(feature) => {
            let quantum = quanta.quantum(feature);
            let buckets = features
                .iter()
                .find(|f| f.feature == feature)
                .map(|f| f.cause_buckets.as_slice())
                .unwrap_or_default();
            if buckets.is_empty() {
                return Err(DiscoveryError::EmptyCauseBuckets {
                    feature: feature.to_string(),
                }
                .into());
            }
            Verdict::Cause {
                feature,
                intervals: merge_runs(buckets, quantum),
            }
        }
        None => Verdict::Ambiguous {
            hypotheses: hypotheses.clone(),
        },
    };

    debug!(
        samples = experience.len(),
        hypotheses = %FeatureSet(&hypotheses),
        cause = ?sole,
        "analysis pass complete"
    );

    Ok(Analysis {
        features,
        hypotheses,
        verdict,
    })
}

/// Renders a feature set as `{X, R}`; the empty set is `{}`.
pub(crate) struct FeatureSet<'a>(pub &'a BTreeSet<Feature>);

impl fmt::Display for FeatureSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, feature) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{feature}")?;
        }
        f.write_str("}")
    }
}
