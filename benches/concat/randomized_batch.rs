use criterion::{criterion_group, BenchmarkId, Criterion};
use string_bundler_bench::config::SweepConfig;
use string_bundler_bench::select::RandomizedBatch;
use string_bundler_bench::strategy::Strategy;

/// Every measured operation draws a fresh batch, so selection cost is included in the timings.
pub fn bench_randomized_batch(c: &mut Criterion) {
    let (cfg, pool) = super::setup(SweepConfig::default());
    let mut selector = RandomizedBatch::seeded(cfg.seed);
    let mut g = c.benchmark_group("randomized_batch");
    super::configure(&mut g, &cfg);

    for &count in &cfg.fragment_counts {
        for strategy in Strategy::ALL.iter() {
            g.bench_with_input(
                BenchmarkId::new(strategy.name(), count),
                &count,
                |b, &count| {
                    b.iter(|| {
                        let batch = selector.select(&pool, count).expect("select");
                        strategy.concat(&batch)
                    })
                },
            );
        }
    }
    g.finish();
}

criterion_group!(benches, bench_randomized_batch);
