use criterion::{criterion_group, criterion_main, Criterion};

use causality_core::{DiscoveryConfig, Feature};
use causality_discovery::analysis::analyze;
use causality_discovery::buckets::classify;
use causality_discovery::{DiscoveryEngine, Experience, RandomSituations, SituationSource};

/// Experience of 10K seeded samples.
fn build_experience() -> Experience {
    let config = DiscoveryConfig::default();
    let mut source = RandomSituations::seeded(42, &config);
    (0..10_000).map(|_| source.next_situation()).collect()
}

fn bench_classify_10k(c: &mut Criterion) {
    let experience = build_experience();
    c.bench_function("classify_radius_10k", |b| {
        b.iter(|| classify(Feature::R, &experience, 0.1));
    });
}

fn bench_analyze_10k(c: &mut Criterion) {
    let experience = build_experience();
    let quanta = DiscoveryConfig::default().quanta;
    c.bench_function("analyze_10k", |b| {
        b.iter(|| analyze(&experience, &quanta).unwrap());
    });
}

fn bench_full_run(c: &mut Criterion) {
    c.bench_function("full_run_50_hits", |b| {
        b.iter(|| {
            let mut engine = DiscoveryEngine::seeded(DiscoveryConfig::default(), 42).unwrap();
            engine.run(|_| {}).unwrap()
        });
    });
}

criterion_group!(benches, bench_classify_10k, bench_analyze_10k, bench_full_run);
criterion_main!(benches);
