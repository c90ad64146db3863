//! Discretization and per-bucket hit classification.

use std::collections::BTreeMap;

use causality_core::{Feature, Situation};
use serde::Serialize;
use tracing::trace;

use crate::experience::Experience;
use crate::pattern::{BucketTag, Pattern};

/// Map a feature value to its bucket index: `round(-0.5 + value / quantum)`.
///
/// Ties round to even, so bucket `i` covers `(q*i, q*(i+1)]` up to floating
/// point error at the edges. Pure: equal inputs always give equal indices.
pub fn bucket_index(value: f64, quantum: f64) -> i64 {
    (-0.5 + value / quantum).round_ties_even() as i64
}

/// Sample counts for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub non_hits: u32,
    pub hits: u32,
}

impl BucketCounts {
    fn record(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.non_hits += 1;
        }
    }

    pub fn tag(&self) -> BucketTag {
        match (self.hits > 0, self.non_hits > 0) {
            (true, true) => BucketTag::Mixed,
            (true, false) => BucketTag::HitOnly,
            _ => BucketTag::NonHitOnly,
        }
    }
}

/// Bucket index → counts, ordered by index.
pub type BucketMap = BTreeMap<i64, BucketCounts>;

/// Count hits and non-hits per bucket of `feature`.
pub fn bucketize(feature: Feature, situations: &[Situation], quantum: f64) -> BucketMap {
    let mut buckets = BucketMap::new();
    for situation in situations {
        let index = bucket_index(feature.value_of(situation), quantum);
        buckets.entry(index).or_default().record(situation.hit);
    }
    buckets
}

/// Result of classifying one feature over the whole experience.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub feature: Feature,
    pub buckets: BucketMap,
    pub pattern: Pattern,
    /// Hit-only bucket indices, ascending.
    pub cause_buckets: Vec<i64>,
}

/// Build the tag pattern over `min..=max` of the present bucket indices.
pub fn pattern_of(buckets: &BucketMap) -> Pattern {
    let (Some(&min), Some(&max)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Pattern::default();
    };
    Pattern::new(
        (min..=max)
            .map(|i| buckets.get(&i).map_or(BucketTag::Empty, BucketCounts::tag))
            .collect(),
    )
}

pub fn classify(feature: Feature, experience: &Experience, quantum: f64) -> Classification {
    let buckets = bucketize(feature, experience.as_slice(), quantum);
    let pattern = pattern_of(&buckets);
    let cause_buckets = buckets
        .iter()
        .filter(|(_, counts)| counts.tag() == BucketTag::HitOnly)
        .map(|(&index, _)| index)
        .collect();
    trace!(feature = %feature, buckets = buckets.len(), pattern = %pattern, "classified feature");
    Classification {
        feature,
        buckets,
        pattern,
        cause_buckets,
    }
}
