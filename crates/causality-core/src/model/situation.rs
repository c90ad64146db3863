use serde::{Deserialize, Serialize};

/// One labeled sample: a point in the plane plus its derived features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Situation {
    pub x: f64,
    pub y: f64,
    /// Euclidean norm of `(x, y)`.
    pub radius: f64,
    /// `atan2(x, y)`: x is the first argument.
    pub angle: f64,
    /// `radius < collision_radius`.
    pub hit: bool,
}

impl Situation {
    /// Derive radius, angle, and the hit flag from raw coordinates.
    pub fn from_coordinates(x: f64, y: f64, collision_radius: f64) -> Self {
        let radius = (x * x + y * y).sqrt();
        Self {
            x,
            y,
            radius,
            angle: x.atan2(y),
            hit: radius < collision_radius,
        }
    }
}
