use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use string_bundler_bench::config::SweepConfig;
use string_bundler_bench::select::FixedPrefix;
use string_bundler_bench::strategy::{self, Strategy};

fn sweep(c: &mut Criterion, name: &str, cfg: SweepConfig) {
    let (cfg, pool) = super::setup(cfg);
    let mut g = c.benchmark_group(name);
    super::configure(&mut g, &cfg);

    for &count in &cfg.fragment_counts {
        let fragments = FixedPrefix.select(&pool, count).expect("select");
        g.throughput(Throughput::Bytes(strategy::total_len(fragments) as u64));

        for strategy in Strategy::ALL.iter() {
            g.bench_with_input(
                BenchmarkId::new(strategy.name(), count),
                &fragments,
                |b, &fragments| b.iter(|| strategy.concat(fragments)),
            );
        }
    }
    g.finish();
}

pub fn bench_fixed_prefix(c: &mut Criterion) {
    sweep(c, "fixed_prefix", SweepConfig::long_run());
}

pub fn bench_fixed_length(c: &mut Criterion) {
    sweep(c, "fixed_prefix/fixed_length", SweepConfig::fixed_length());
}

criterion_group!(benches, bench_fixed_prefix, bench_fixed_length);
