//! Observability for the experiment.
//! `tracing` crate with `EnvFilter`, read from `CAUSALITY_LOG`.

pub mod setup;

pub use setup::{init_tracing, parse_filter};
