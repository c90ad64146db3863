//! Property tests for situation derivation.

use proptest::prelude::*;

use causality_core::{Feature, Situation};

proptest! {
    #[test]
    fn hit_iff_radius_below_collision(
        x in -3.0_f64..3.0,
        y in -3.0_f64..3.0,
        collision in 0.1_f64..2.9,
    ) {
        let s = Situation::from_coordinates(x, y, collision);
        prop_assert_eq!(s.hit, s.radius < collision);
        prop_assert!(s.radius >= 0.0);
        prop_assert!((s.radius - x.hypot(y)).abs() < 1e-12);
    }

    #[test]
    fn feature_values_read_the_matching_field(x in -3.0_f64..3.0, y in -3.0_f64..3.0) {
        let s = Situation::from_coordinates(x, y, 1.0);
        prop_assert_eq!(Feature::X.value_of(&s), x);
        prop_assert_eq!(Feature::Y.value_of(&s), y);
        prop_assert_eq!(Feature::R.value_of(&s), s.radius);
        prop_assert_eq!(Feature::A.value_of(&s), x.atan2(y));
    }
}
