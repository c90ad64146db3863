//! Console rendering of analysis passes.

use std::collections::BTreeSet;
use std::fmt;

use causality_core::constants::REPORT_INDENT;
use causality_core::{Feature, Situation};
use serde::Serialize;

use crate::analysis::{Analysis, FeatureSet, Verdict};
use crate::intervals::join_intervals;

/// Everything printed after a hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitReport {
    /// Samples generated so far, including this one.
    pub sample_count: u64,
    /// Hits observed so far, including this one.
    pub hit_count: u32,
    /// The sample that triggered this pass.
    pub situation: Situation,
    pub analysis: Analysis,
}

impl fmt::Display for HitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.situation;
        writeln!(f)?;
        writeln!(
            f,
            " {:4} samples, {:2} hits  x:{:.6} Y:{:.6} R:{:.6} A:{:.6}",
            self.sample_count, self.hit_count, s.x, s.y, s.radius, s.angle
        )?;
        for feature in &self.analysis.features {
            writeln!(f, "{REPORT_INDENT}{} [{}]", feature.feature, feature.pattern)?;
        }
        match &self.analysis.verdict {
            Verdict::Cause { feature, intervals } => write!(
                f,
                "{REPORT_INDENT}CAUSE: {feature} in {}",
                join_intervals(intervals)
            ),
            Verdict::Ambiguous { hypotheses } => {
                write!(f, "{REPORT_INDENT}Possible causes: {}", FeatureSet(hypotheses))
            }
        }
    }
}

/// Line printed before the first sample: every feature is still a candidate.
pub fn opening_banner() -> String {
    let all: BTreeSet<Feature> = Feature::ALL.into_iter().collect();
    format!("\n{REPORT_INDENT}Possible causes: {}", FeatureSet(&all))
}
