use criterion::{criterion_group, BenchmarkId, Criterion};
use string_bundler_bench::config::SweepConfig;
use string_bundler_bench::select::FixedPrefix;
use string_bundler_bench::sink::Sink;
use string_bundler_bench::strategy::Strategy;
use tracing::info;

/// Same sweep as `fixed_prefix`, but results go into a [`Sink`] instead of back to criterion.
pub fn bench_sink(c: &mut Criterion) {
    let (cfg, pool) = super::setup(SweepConfig::long_run());
    let mut g = c.benchmark_group("sink");
    super::configure(&mut g, &cfg);

    let mut sink = Sink::default();
    for &count in &cfg.fragment_counts {
        let fragments = FixedPrefix.select(&pool, count).expect("select");

        for strategy in Strategy::ALL.iter() {
            g.bench_with_input(
                BenchmarkId::new(strategy.name(), count),
                &fragments,
                |b, &fragments| b.iter(|| sink.consume(strategy.concat(fragments))),
            );
        }
    }
    g.finish();

    info!(
        consumed = sink.consumed(),
        bytes = sink.bytes(),
        "sink drained"
    );
}

criterion_group!(benches, bench_sink);
