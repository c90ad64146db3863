//! Runs one causality discovery experiment and prints its trace to stdout.
//!
//! Set `CAUSALITY_CONFIG` to a TOML file to override the defaults and
//! `CAUSALITY_LOG` to control diagnostics on stderr.

use std::process::ExitCode;

use causality_core::constants::CONFIG_ENV_VAR;
use causality_core::tracing::init_tracing;
use causality_core::{CausalityResult, DiscoveryConfig};
use causality_discovery::generator::time_seed;
use causality_discovery::report::opening_banner;
use causality_discovery::DiscoveryEngine;
use tracing::info;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CausalityResult<()> {
    let config = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => DiscoveryConfig::load(path)?,
        None => DiscoveryConfig::default(),
    };
    let seed = config.seed.unwrap_or_else(time_seed);
    info!(seed, "random source seeded");

    let mut engine = DiscoveryEngine::seeded(config, seed)?;
    println!("{}", opening_banner());
    engine.run(|report| println!("{report}"))?;
    Ok(())
}
