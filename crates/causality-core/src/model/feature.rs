use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Situation;
use crate::errors::CausalityError;

/// A candidate cause of a hit.
///
/// Declaration order is the order features are analyzed and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Horizontal coordinate.
    X,
    /// Vertical coordinate.
    Y,
    /// Distance from the origin.
    R,
    /// Angle, `atan2(x, y)`.
    A,
}

impl Feature {
    /// All candidate features in analysis order.
    pub const ALL: [Feature; 4] = [Feature::X, Feature::Y, Feature::R, Feature::A];

    /// Default discretization quantum, shared by every feature.
    pub const DEFAULT_QUANTUM: f64 = 0.1;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::R => "R",
            Self::A => "A",
        }
    }

    /// Read this feature's raw value off a situation.
    pub fn value_of(&self, situation: &Situation) -> f64 {
        match self {
            Self::X => situation.x,
            Self::Y => situation.y,
            Self::R => situation.radius,
            Self::A => situation.angle,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = CausalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "r" | "radius" => Ok(Self::R),
            "a" | "angle" => Ok(Self::A),
            _ => Err(CausalityError::UnknownFeature {
                name: s.to_string(),
            }),
        }
    }
}
