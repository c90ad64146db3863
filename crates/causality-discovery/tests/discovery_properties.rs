//! Property tests for discretization, patterns, and interval merging.

use proptest::prelude::*;

use causality_core::{DiscoveryConfig, Feature, Situation};
use causality_discovery::buckets::{bucket_index, bucketize, pattern_of};
use causality_discovery::intervals::{bucket_runs, merge_runs};
use causality_discovery::{BucketTag, Pattern, RandomSituations, SituationSource};

fn tag_strategy() -> impl Strategy<Value = BucketTag> {
    prop_oneof![
        Just(BucketTag::Mixed),
        Just(BucketTag::HitOnly),
        Just(BucketTag::NonHitOnly),
        Just(BucketTag::Empty),
    ]
}

proptest! {
    #[test]
    fn generated_samples_stay_in_bounds(seed in any::<u64>()) {
        let config = DiscoveryConfig::default();
        let mut source = RandomSituations::seeded(seed, &config);
        for _ in 0..200 {
            let s = source.next_situation();
            prop_assert!(s.radius <= config.visibility_radius);
            prop_assert_eq!(s.hit, s.radius < config.collision_radius);
        }
    }

    #[test]
    fn bucket_index_is_pure(value in -4.0_f64..4.0, quantum in 0.01_f64..1.0) {
        prop_assert_eq!(bucket_index(value, quantum), bucket_index(value, quantum));
    }

    #[test]
    fn bucket_index_is_monotone(a in -4.0_f64..4.0, b in -4.0_f64..4.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bucket_index(lo, 0.1) <= bucket_index(hi, 0.1));
    }

    #[test]
    fn pattern_spans_min_to_max(points in prop::collection::vec((-3.0_f64..3.0, -3.0_f64..3.0), 1..60)) {
        let situations: Vec<Situation> = points
            .iter()
            .map(|&(x, y)| Situation::from_coordinates(x, y, 1.0))
            .collect();
        for feature in Feature::ALL {
            let buckets = bucketize(feature, &situations, 0.1);
            let pattern = pattern_of(&buckets);
            let min = *buckets.keys().next().unwrap();
            let max = *buckets.keys().next_back().unwrap();
            prop_assert_eq!(pattern.len() as i64, max - min + 1);
            let total: u32 = buckets.values().map(|c| c.hits + c.non_hits).sum();
            prop_assert_eq!(total as usize, situations.len());
        }
    }

    #[test]
    fn partition_matches_adjacent_mixed_rule(tags in prop::collection::vec(tag_strategy(), 0..40)) {
        let pattern = Pattern::new(tags.clone());
        let adjacent_mixed = tags
            .windows(2)
            .any(|w| w[0] == BucketTag::Mixed && w[1] == BucketTag::Mixed);
        let expected = tags.len() <= 2 || !adjacent_mixed;
        prop_assert_eq!(pattern.is_partitioned(), expected, "pattern {:?}", pattern.to_string());
    }

    #[test]
    fn pattern_text_round_trips(tags in prop::collection::vec(tag_strategy(), 0..40)) {
        let pattern = Pattern::new(tags);
        let parsed: Pattern = pattern.to_string().parse().unwrap();
        prop_assert_eq!(parsed, pattern);
    }

    #[test]
    fn runs_cover_exactly_the_input(buckets in prop::collection::vec(-30_i64..30, 1..40)) {
        let runs = bucket_runs(&buckets);
        let mut covered: Vec<i64> = runs.iter().flat_map(|&(h, t)| h..=t).collect();
        let mut expected = buckets.clone();
        expected.sort_unstable();
        expected.dedup();
        covered.sort_unstable();
        prop_assert_eq!(covered, expected);
        // Runs are separated by at least one missing index.
        prop_assert!(runs.windows(2).all(|w| w[1].0 > w[0].1 + 1));
        prop_assert_eq!(merge_runs(&buckets, 0.1).len(), runs.len());
    }
}
