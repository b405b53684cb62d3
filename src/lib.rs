//! Micro-benchmarks for string accumulation.
//!
//! The library holds everything the benchmarks measure: a seeded [`pool`] of random alphanumeric
//! fragments, the two [`select`]ion policies, the accumulation [`strategy`]s (including the
//! [`bundler`]), and a [`sink`] for results. The `concat` bench target sweeps every strategy over
//! every fragment count in a [`config::SweepConfig`].
//!
//! ```
//! use string_bundler_bench::config::SweepConfig;
//! use string_bundler_bench::pool::Pool;
//! use string_bundler_bench::select::FixedPrefix;
//! use string_bundler_bench::strategy::Strategy;
//!
//! let cfg = SweepConfig::default();
//! cfg.validate().expect("valid sweep");
//!
//! let pool = Pool::seeded(&cfg.pool, cfg.seed).expect("pool");
//! let fragments = FixedPrefix.select(&pool, 5).expect("selection");
//!
//! let expected = fragments.concat();
//! for strategy in Strategy::ALL.iter() {
//!     assert_eq!(strategy.concat(fragments), expected);
//! }
//! ```

#![warn(missing_docs, unused_results)]
#![cfg_attr(test, deny(warnings))]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

pub mod bundler;
pub mod config;
mod error;
pub mod pool;
pub mod select;
pub mod sink;
pub mod strategy;

pub use error::Error;
