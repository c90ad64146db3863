//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::DEFAULT_LOG_FILTER;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `CAUSALITY_LOG` for per-crate levels, e.g.
/// `CAUSALITY_LOG=causality_discovery=debug`. Falls back to `warn` when unset
/// or invalid. Log lines go to stderr; stdout carries only the report trace.
///
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = parse_filter(std::env::var(LOG_ENV_VAR).ok().as_deref());

        // A subscriber may already be installed by an embedding test harness.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Build the filter from `CAUSALITY_LOG`-style directives.
///
/// Missing or unparsable directives fall back to `warn`.
pub fn parse_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
