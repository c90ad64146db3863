//! Experiment configuration.
//!
//! Every field has a default matching the reference experiment, so an empty
//! TOML document (or no file at all) reproduces it exactly.

pub mod defaults;
mod quanta_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use quanta_config::QuantaConfig;

use crate::errors::ConfigError;
use crate::model::Feature;

/// Top-level configuration for a discovery run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Coordinates are drawn within this radius.
    pub visibility_radius: f64,
    /// Samples closer to the origin than this are hits.
    pub collision_radius: f64,
    /// The driver stops once this many hits have been observed.
    pub stop_at_hit: u32,
    /// Fixed RNG seed. `None` seeds from the wall clock.
    pub seed: Option<u64>,
    pub quanta: QuantaConfig,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            visibility_radius: defaults::DEFAULT_VISIBILITY_RADIUS,
            collision_radius: defaults::DEFAULT_COLLISION_RADIUS,
            stop_at_hit: defaults::DEFAULT_STOP_AT_HIT,
            seed: None,
            quanta: QuantaConfig::default(),
        }
    }
}

impl DiscoveryConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: shown.clone(),
            },
            _ => ConfigError::ReadError {
                path: shown.clone(),
                message: e.to_string(),
            },
        })?;
        let config = Self::parse(&content, &shown)?;
        tracing::debug!(path = %shown, "loaded discovery config");
        Ok(config)
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the sampler and driver rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.visibility_radius.is_finite() && self.visibility_radius > 0.0) {
            return Err(ConfigError::invalid(
                "visibility_radius",
                format!("must be a positive number, got {}", self.visibility_radius),
            ));
        }
        if !(self.collision_radius.is_finite() && self.collision_radius > 0.0) {
            return Err(ConfigError::invalid(
                "collision_radius",
                format!("must be a positive number, got {}", self.collision_radius),
            ));
        }
        if self.collision_radius >= self.visibility_radius {
            return Err(ConfigError::invalid(
                "collision_radius",
                format!(
                    "must be below visibility_radius ({} >= {})",
                    self.collision_radius, self.visibility_radius
                ),
            ));
        }
        if self.stop_at_hit == 0 {
            return Err(ConfigError::invalid("stop_at_hit", "must be at least 1"));
        }
        for feature in Feature::ALL {
            let q = self.quanta.quantum(feature);
            if !(q.is_finite() && q > 0.0) {
                return Err(ConfigError::invalid(
                    &format!("quanta.{}", feature.as_str().to_ascii_lowercase()),
                    format!("must be a positive number, got {q}"),
                ));
            }
        }
        Ok(())
    }
}
