/// Errors raised while analyzing the experience.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("no hit-only buckets to format for feature {feature}")]
    EmptyCauseBuckets { feature: String },

    #[error("invalid pattern character {found:?} at position {position}")]
    InvalidPattern { found: char, position: usize },
}
