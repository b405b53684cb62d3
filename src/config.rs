//! Declared parameters for a benchmark sweep.
//!
//! Everything here is a compile-time constant wrapped in a plain struct: there are no config files
//! and no environment variables. The defaults reproduce the classic sweep of 100 fragments of 10 to
//! 100 characters, joined 5 to 50 at a time.

use crate::error::{Error, Result};
use itertools::Itertools;
use std::time::Duration;
use tracing::info;

/// Number of fragments generated into the pool.
pub const POOL_SIZE: usize = 100;
/// Shortest fragment in a randomized-length pool.
pub const MIN_FRAGMENT_LEN: usize = 10;
/// Longest fragment in a randomized-length pool.
pub const MAX_FRAGMENT_LEN: usize = 100;
/// Fragment length used by the fixed-length variant.
pub const FIXED_FRAGMENT_LEN: usize = 20;
/// Numbers of fragments joined per measured operation.
pub const FRAGMENT_COUNTS: &[usize] = &[5, 10, 20, 30, 40, 50];

/// Warm-up per trial in the default (randomized-batch) profile.
pub const WARM_UP: Duration = Duration::from_secs(5);
/// Measurement per trial in the default (randomized-batch) profile.
pub const MEASUREMENT: Duration = Duration::from_secs(5);
/// Warm-up per trial in the [`SweepConfig::long_run`] profile.
pub const LONG_WARM_UP: Duration = Duration::from_secs(25);
/// Measurement per trial in the [`SweepConfig::long_run`] profile.
pub const LONG_MEASUREMENT: Duration = Duration::from_secs(100);

/// FragmentLength describes how long each generated fragment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentLength {
    /// Every fragment has exactly this many characters.
    Fixed(usize),
    /// Each fragment's length is drawn uniformly from `min..=max`.
    Range {
        /// Inclusive lower bound
        min: usize,
        /// Inclusive upper bound
        max: usize,
    },
}

impl FragmentLength {
    /// The inclusive `(min, max)` bounds, after checking they aren't inverted.
    ///
    /// ```
    /// use string_bundler_bench::config::FragmentLength;
    ///
    /// assert_eq!(FragmentLength::Fixed(20).bounds(), Ok((20, 20)));
    /// assert!(FragmentLength::Range { min: 5, max: 1 }.bounds().is_err());
    /// ```
    pub fn bounds(&self) -> Result<(usize, usize)> {
        match *self {
            FragmentLength::Fixed(len) => Ok((len, len)),
            FragmentLength::Range { min, max } if min > max => {
                Err(Error::InvalidLengthBounds { min, max })
            }
            FragmentLength::Range { min, max } => Ok((min, max)),
        }
    }
}

impl Default for FragmentLength {
    fn default() -> Self {
        FragmentLength::Range {
            min: MIN_FRAGMENT_LEN,
            max: MAX_FRAGMENT_LEN,
        }
    }
}

/// PoolConfig controls fragment pool generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of fragments in the pool
    pub size: usize,
    /// Length of each fragment
    pub length: FragmentLength,
}

impl PoolConfig {
    /// Checks that the pool can actually be generated.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::EmptyPool);
        }
        let _ = self.length.bounds()?;
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            size: POOL_SIZE,
            length: FragmentLength::default(),
        }
    }
}

/// SweepConfig is the full parameter grid for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// How the shared fragment pool is generated
    pub pool: PoolConfig,
    /// Values of N to measure, one trial each
    pub fragment_counts: Vec<usize>,
    /// Discarded warm-up time per trial
    pub warm_up: Duration,
    /// Measured time per trial
    pub measurement: Duration,
    /// Number of samples criterion collects per trial
    pub sample_size: usize,
    /// Seed for pool generation and randomized selection
    pub seed: u64,
}

impl SweepConfig {
    /// The long-running profile used by the fixed-prefix and sink sweeps: 25 s of warm-up and
    /// 100 s of measurement per trial. [`SweepConfig::default`] keeps the short 5 s / 5 s profile
    /// of the randomized-batch sweep.
    pub fn long_run() -> Self {
        SweepConfig {
            warm_up: LONG_WARM_UP,
            measurement: LONG_MEASUREMENT,
            ..SweepConfig::default()
        }
    }

    /// The fixed-length variant of [`long_run`]: every fragment is [`FIXED_FRAGMENT_LEN`]
    /// characters long.
    ///
    /// [`long_run`]: SweepConfig::long_run
    pub fn fixed_length() -> Self {
        SweepConfig {
            pool: PoolConfig {
                length: FragmentLength::Fixed(FIXED_FRAGMENT_LEN),
                ..PoolConfig::default()
            },
            ..SweepConfig::long_run()
        }
    }

    /// validate rejects sweeps that can't run: an empty parameter set, a zero fragment count,
    /// an invalid pool, or a fragment count larger than the pool (fixed-prefix selection takes
    /// the first N fragments, so every N has to fit).
    ///
    /// ```
    /// use string_bundler_bench::{config::SweepConfig, Error};
    ///
    /// assert_eq!(SweepConfig::default().validate(), Ok(()));
    ///
    /// let empty = SweepConfig { fragment_counts: vec![], ..SweepConfig::default() };
    /// assert_eq!(empty.validate(), Err(Error::EmptyParameterSet));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.fragment_counts.is_empty() {
            return Err(Error::EmptyParameterSet);
        }
        self.pool.validate()?;
        for &count in &self.fragment_counts {
            if count == 0 {
                return Err(Error::ZeroFragmentCount);
            }
            if count > self.pool.size {
                return Err(Error::FragmentCountExceedsPool {
                    count,
                    pool: self.pool.size,
                });
            }
        }

        info!(
            pool = self.pool.size,
            length = ?self.pool.length,
            counts = %self.fragment_counts.iter().join(","),
            warm_up = ?self.warm_up,
            measurement = ?self.measurement,
            seed = self.seed,
            "validated sweep"
        );
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            pool: PoolConfig::default(),
            fragment_counts: FRAGMENT_COUNTS.to_vec(),
            warm_up: WARM_UP,
            measurement: MEASUREMENT,
            sample_size: 100,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SweepConfig::default().validate().expect("default sweep");
        SweepConfig::fixed_length()
            .validate()
            .expect("fixed-length sweep");
        assert_eq!(
            SweepConfig::fixed_length().pool.length,
            FragmentLength::Fixed(FIXED_FRAGMENT_LEN)
        );
    }

    #[test]
    fn timing_profiles() {
        let short = SweepConfig::default();
        assert_eq!(short.warm_up, Duration::from_secs(5));
        assert_eq!(short.measurement, Duration::from_secs(5));

        for long in &[SweepConfig::long_run(), SweepConfig::fixed_length()] {
            assert_eq!(long.warm_up, Duration::from_secs(25));
            assert_eq!(long.measurement, Duration::from_secs(100));
            assert_eq!(long.fragment_counts, short.fragment_counts);
            assert_eq!(long.seed, short.seed);
        }
        assert_eq!(SweepConfig::long_run().pool, short.pool);
    }

    #[test]
    fn rejects_misconfiguration() {
        let base = SweepConfig::default();

        assert_matches!(
            SweepConfig {
                fragment_counts: vec![5, 0],
                ..base.clone()
            }
            .validate(),
            Err(Error::ZeroFragmentCount)
        );

        assert_matches!(
            SweepConfig {
                fragment_counts: vec![5, 101],
                ..base.clone()
            }
            .validate(),
            Err(Error::FragmentCountExceedsPool {
                count: 101,
                pool: 100
            })
        );

        assert_matches!(
            SweepConfig {
                pool: PoolConfig {
                    size: 0,
                    ..PoolConfig::default()
                },
                ..base.clone()
            }
            .validate(),
            Err(Error::EmptyPool)
        );

        assert_matches!(
            SweepConfig {
                pool: PoolConfig {
                    size: 10,
                    length: FragmentLength::Range { min: 11, max: 10 },
                },
                fragment_counts: vec![1],
                ..base
            }
            .validate(),
            Err(Error::InvalidLengthBounds { min: 11, max: 10 })
        );
    }

    #[test]
    fn degenerate_range_is_fixed() {
        assert_eq!(
            FragmentLength::Range { min: 7, max: 7 }.bounds(),
            FragmentLength::Fixed(7).bounds()
        );
    }
}
