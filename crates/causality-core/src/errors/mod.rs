//! Error types for the causality workspace.
//! One enum per subsystem, unified under [`CausalityError`].

mod config_error;
mod discovery_error;

pub use config_error::ConfigError;
pub use discovery_error::DiscoveryError;

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum CausalityError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("unknown feature: {name:?} (expected one of X, Y, R, A)")]
    UnknownFeature { name: String },
}

pub type CausalityResult<T> = Result<T, CausalityError>;
