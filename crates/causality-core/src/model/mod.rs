//! Domain model: the four candidate features and the sampled situation.

mod feature;
mod situation;

pub use feature::Feature;
pub use situation::Situation;
