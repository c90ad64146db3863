use serde::{Deserialize, Serialize};

use super::defaults;
use crate::model::Feature;

/// Per-feature discretization quanta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantaConfig {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub a: f64,
}

impl QuantaConfig {
    /// Same quantum for every feature.
    pub fn uniform(quantum: f64) -> Self {
        Self {
            x: quantum,
            y: quantum,
            r: quantum,
            a: quantum,
        }
    }

    pub fn quantum(&self, feature: Feature) -> f64 {
        match feature {
            Feature::X => self.x,
            Feature::Y => self.y,
            Feature::R => self.r,
            Feature::A => self.a,
        }
    }
}

impl Default for QuantaConfig {
    fn default() -> Self {
        Self::uniform(defaults::DEFAULT_QUANTUM)
    }
}
