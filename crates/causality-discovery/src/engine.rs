//! DiscoveryEngine: owns the experience and drives the sample/analyze loop.

use causality_core::{CausalityResult, DiscoveryConfig};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::analyze;
use crate::experience::Experience;
use crate::generator::{RandomSituations, SituationSource};
use crate::report::HitReport;

/// Counters at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub samples: u64,
    pub hits: u32,
}

/// The causality discovery loop.
///
/// Generates samples until `stop_at_hit` hits have been seen, re-running the
/// full analysis after every hit.
pub struct DiscoveryEngine<S> {
    config: DiscoveryConfig,
    source: S,
    experience: Experience,
    samples: u64,
    hits: u32,
}

/// Engine driven by the default seeded random sampler.
pub type SeededEngine = DiscoveryEngine<RandomSituations<StdRng>>;

impl SeededEngine {
    /// Engine backed by a seeded random sampler.
    pub fn seeded(config: DiscoveryConfig, seed: u64) -> CausalityResult<Self> {
        let source = RandomSituations::seeded(seed, &config);
        Self::new(config, source)
    }
}

impl<S: SituationSource> DiscoveryEngine<S> {
    /// Create an engine. Rejects configs the loop could not finish with.
    pub fn new(config: DiscoveryConfig, source: S) -> CausalityResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            experience: Experience::new(),
            samples: 0,
            hits: 0,
        })
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn experience(&self) -> &Experience {
        &self.experience
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn is_finished(&self) -> bool {
        self.hits >= self.config.stop_at_hit
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            samples: self.samples,
            hits: self.hits,
        }
    }

    /// Draw one sample. Returns a report when it was a hit.
    pub fn step(&mut self) -> CausalityResult<Option<HitReport>> {
        let situation = self.source.next_situation();
        self.samples += 1;
        self.experience.append(situation);

        if !situation.hit {
            return Ok(None);
        }
        self.hits += 1;
        debug!(samples = self.samples, hits = self.hits, "hit observed");

        let analysis = analyze(&self.experience, &self.config.quanta)?;
        Ok(Some(HitReport {
            sample_count: self.samples,
            hit_count: self.hits,
            situation,
            analysis,
        }))
    }

    /// Run until `stop_at_hit` hits, handing each report to `on_hit`.
    pub fn run<F>(&mut self, mut on_hit: F) -> CausalityResult<RunSummary>
    where
        F: FnMut(&HitReport),
    {
        info!(stop_at_hit = self.config.stop_at_hit, "causality discovery started");
        while !self.is_finished() {
            if let Some(report) = self.step()? {
                on_hit(&report);
            }
        }
        let summary = self.summary();
        info!(
            samples = summary.samples,
            hits = summary.hits,
            "causality discovery finished"
        );
        Ok(summary)
    }

    /// Run to completion and collect every report.
    pub fn run_to_end(&mut self) -> CausalityResult<Vec<HitReport>> {
        let mut reports = Vec::with_capacity(self.config.stop_at_hit as usize);
        self.run(|report| reports.push(report.clone()))?;
        Ok(reports)
    }
}
