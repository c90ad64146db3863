//! Hit-only buckets back to real-valued intervals.

use std::fmt;

use causality_core::{DiscoveryError, Feature};
use serde::Serialize;

/// Real interval `[low .. high]` covered by a run of buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CauseInterval {
    pub low: f64,
    pub high: f64,
}

impl fmt::Display for CauseInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {:.2} .. {:.2} ]", self.low, self.high)
    }
}

/// Group bucket indices into inclusive runs of consecutive values.
///
/// Input order and duplicates do not matter; runs come out ascending.
pub fn bucket_runs(buckets: &[i64]) -> Vec<(i64, i64)> {
    let mut sorted = buckets.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut runs: Vec<(i64, i64)> = Vec::new();
    for index in sorted {
        match runs.last_mut() {
            Some((_, tail)) if index == *tail + 1 => *tail = index,
            _ => runs.push((index, index)),
        }
    }
    runs
}

/// Run `[head..tail]` maps to `[q*head, q*(tail+1)]`.
pub fn merge_runs(buckets: &[i64], quantum: f64) -> Vec<CauseInterval> {
    bucket_runs(buckets)
        .into_iter()
        .map(|(head, tail)| CauseInterval {
            low: quantum * head as f64,
            high: quantum * (tail + 1) as f64,
        })
        .collect()
}

pub fn join_intervals(intervals: &[CauseInterval]) -> String {
    intervals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Human-readable union of the intervals covered by `buckets`.
///
/// `buckets` must be non-empty.
pub fn format_intervals(
    feature: Feature,
    buckets: &[i64],
    quantum: f64,
) -> Result<String, DiscoveryError> {
    if buckets.is_empty() {
        return Err(DiscoveryError::EmptyCauseBuckets {
            feature: feature.to_string(),
        });
    }
    Ok(join_intervals(&merge_runs(buckets, quantum)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_non_consecutive_runs() {
        assert_eq!(
            format_intervals(Feature::R, &[2, 3, 4, 7], 0.1).unwrap(),
            "[ 0.20 .. 0.50 ] or [ 0.70 .. 0.80 ]"
        );
    }

    #[test]
    fn single_bucket() {
        assert_eq!(format_intervals(Feature::X, &[0], 0.1).unwrap(), "[ 0.00 .. 0.10 ]");
    }

    #[test]
    fn negative_buckets() {
        assert_eq!(
            format_intervals(Feature::A, &[-3, -2], 0.5).unwrap(),
            "[ -1.50 .. -0.50 ]"
        );
    }

    #[test]
    fn unsorted_input_is_normalized() {
        assert_eq!(bucket_runs(&[7, 3, 2, 4, 3]), vec![(2, 4), (7, 7)]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = format_intervals(Feature::Y, &[], 0.1).unwrap_err();
        assert!(matches!(err, DiscoveryError::EmptyCauseBuckets { ref feature } if feature == "Y"));
    }
}
