//! # causality-core
//!
//! Foundation crate for the causality discovery experiment.
//! Defines the feature and situation types, errors, config, tracing, and constants.
//! The discovery crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{DiscoveryConfig, QuantaConfig};
pub use errors::{CausalityError, CausalityResult, ConfigError, DiscoveryError};
pub use model::{Feature, Situation};
