// Single source of truth for all default values.

// --- Geometry ---
pub const DEFAULT_VISIBILITY_RADIUS: f64 = 3.0;
pub const DEFAULT_COLLISION_RADIUS: f64 = 1.0;

// --- Driver ---
pub const DEFAULT_STOP_AT_HIT: u32 = 50;

// --- Discretization ---
pub const DEFAULT_QUANTUM: f64 = crate::model::Feature::DEFAULT_QUANTUM;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "warn";
