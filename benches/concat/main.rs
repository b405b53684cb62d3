use criterion::measurement::WallTime;
use criterion::{criterion_main, BenchmarkGroup};
use string_bundler_bench::config::SweepConfig;
use string_bundler_bench::pool::Pool;
use tracing::Level;

mod fixed_prefix;
mod randomized_batch;
mod sink;

criterion_main!(
    fixed_prefix::benches,
    sink::benches,
    randomized_batch::benches
);

/// Validates `cfg` and generates its pool. A misconfigured sweep aborts the run before any timing.
fn setup(cfg: SweepConfig) -> (SweepConfig, Pool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();

    cfg.validate().expect("invalid sweep configuration");
    let pool = Pool::seeded(&cfg.pool, cfg.seed).expect("failed to generate fragment pool");
    (cfg, pool)
}

/// Applies the sweep's warm-up and measurement phases to a group.
fn configure(g: &mut BenchmarkGroup<WallTime>, cfg: &SweepConfig) {
    let _ = g
        .warm_up_time(cfg.warm_up)
        .measurement_time(cfg.measurement)
        .sample_size(cfg.sample_size);
}
