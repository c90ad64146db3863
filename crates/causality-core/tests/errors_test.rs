//! Tests for the error hierarchy.

use causality_core::{CausalityError, ConfigError, DiscoveryError};

#[test]
fn subsystem_errors_convert_into_top_level() {
    let config: CausalityError = ConfigError::FileNotFound {
        path: "causality.toml".into(),
    }
    .into();
    assert!(matches!(config, CausalityError::Config(_)));

    let discovery: CausalityError = DiscoveryError::EmptyCauseBuckets {
        feature: "R".into(),
    }
    .into();
    assert!(matches!(discovery, CausalityError::Discovery(_)));
}

#[test]
fn transparent_variants_keep_inner_message() {
    let err: CausalityError = DiscoveryError::EmptyCauseBuckets {
        feature: "A".into(),
    }
    .into();
    assert_eq!(err.to_string(), "no hit-only buckets to format for feature A");
}

#[test]
fn unknown_feature_message_lists_valid_names() {
    let err = CausalityError::UnknownFeature { name: "H".into() };
    let msg = err.to_string();
    assert!(msg.contains("\"H\""));
    assert!(msg.contains("X, Y, R, A"));
}
