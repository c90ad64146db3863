//! Random situation generation.

use causality_core::{DiscoveryConfig, Situation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can produce the next labeled situation.
pub trait SituationSource {
    fn next_situation(&mut self) -> Situation;
}

impl<S: SituationSource + ?Sized> SituationSource for &mut S {
    fn next_situation(&mut self) -> Situation {
        (**self).next_situation()
    }
}

/// Rejection sampler over the disc of radius `visibility_radius`.
///
/// Both coordinates are drawn uniformly from `[-Rt, Rt)` and redrawn together
/// until their norm is at most `Rt`. Roughly 21% of draws are rejected, so the
/// loop terminates with probability 1.
#[derive(Debug, Clone)]
pub struct RandomSituations<R> {
    rng: R,
    visibility_radius: f64,
    collision_radius: f64,
}

impl RandomSituations<StdRng> {
    /// Deterministic sampler for a given seed.
    pub fn seeded(seed: u64, config: &DiscoveryConfig) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> RandomSituations<R> {
    pub fn from_rng(rng: R, config: &DiscoveryConfig) -> Self {
        Self {
            rng,
            visibility_radius: config.visibility_radius,
            collision_radius: config.collision_radius,
        }
    }

    fn draw_coordinate(&mut self) -> f64 {
        self.visibility_radius * (-1.0 + 2.0 * self.rng.gen::<f64>())
    }
}

impl<R: Rng> SituationSource for RandomSituations<R> {
    fn next_situation(&mut self) -> Situation {
        loop {
            let x = self.draw_coordinate();
            let y = self.draw_coordinate();
            let candidate = Situation::from_coordinates(x, y, self.collision_radius);
            if candidate.radius <= self.visibility_radius {
                return candidate;
            }
        }
    }
}

/// Replays a fixed list of situations, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedSituations {
    situations: Vec<Situation>,
    cursor: usize,
}

impl ScriptedSituations {
    /// Returns `None` for an empty script.
    pub fn new(situations: Vec<Situation>) -> Option<Self> {
        if situations.is_empty() {
            return None;
        }
        Some(Self {
            situations,
            cursor: 0,
        })
    }

    /// Build a script from raw coordinates.
    pub fn from_coordinates(points: &[(f64, f64)], collision_radius: f64) -> Option<Self> {
        Self::new(
            points
                .iter()
                .map(|&(x, y)| Situation::from_coordinates(x, y, collision_radius))
                .collect(),
        )
    }
}

impl SituationSource for ScriptedSituations {
    fn next_situation(&mut self) -> Situation {
        let situation = self.situations[self.cursor];
        self.cursor = (self.cursor + 1) % self.situations.len();
        situation
    }
}

/// Seed derived from the wall clock, nanoseconds since the Unix epoch.
pub fn time_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}
