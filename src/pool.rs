//! Fragment pool generation.

use crate::config::PoolConfig;
use crate::error::{Error, Result};
use rand::distributions::{Alphanumeric, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Pool is the fixed, ordered set of random alphanumeric fragments every trial selects from.
///
/// A pool is generated once at setup and never mutated afterwards; selectors only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    fragments: Vec<String>,
}

impl Pool {
    /// generate draws `cfg.size` fragments from `rng`, each made of `[A-Za-z0-9]` characters with a
    /// length inside `cfg.length`'s inclusive bounds.
    pub fn generate<R>(cfg: &PoolConfig, rng: &mut R) -> Result<Pool>
    where
        R: Rng + ?Sized,
    {
        cfg.validate()?;
        let (min, max) = cfg.length.bounds()?;

        let fragments = (0..cfg.size)
            .map(|_| {
                let len = rng.gen_range(min..=max);
                Alphanumeric
                    .sample_iter(&mut *rng)
                    .take(len)
                    .map(char::from)
                    .collect::<String>()
            })
            .collect::<Vec<_>>();

        debug!(size = cfg.size, min, max, "generated fragment pool");
        Ok(Pool { fragments })
    }

    /// seeded generates a pool from a [`StdRng`] seeded with `seed`, so that two calls with the same
    /// arguments produce the same pool.
    ///
    /// ```
    /// use string_bundler_bench::{config::PoolConfig, pool::Pool};
    ///
    /// let cfg = PoolConfig::default();
    /// assert_eq!(Pool::seeded(&cfg, 7).unwrap(), Pool::seeded(&cfg, 7).unwrap());
    /// ```
    pub fn seeded(cfg: &PoolConfig, seed: u64) -> Result<Pool> {
        Pool::generate(cfg, &mut StdRng::seed_from_u64(seed))
    }

    /// Wraps an existing list of fragments, ex. for hand-written test pools.
    pub fn from_fragments<I, S>(fragments: I) -> Result<Pool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments = fragments.into_iter().map(Into::into).collect::<Vec<_>>();
        if fragments.is_empty() {
            return Err(Error::EmptyPool);
        }
        Ok(Pool { fragments })
    }

    /// Number of fragments in the pool.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always false for a generated pool.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The fragments, in generation order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The fragment at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fragments.get(index).map(String::as_str)
    }

    /// Sum of the byte lengths of every fragment in the pool.
    pub fn total_len(&self) -> usize {
        self.fragments.iter().map(String::len).sum()
    }

    /// Whether `fragment` is one of the pool's fragments.
    pub fn contains(&self, fragment: &str) -> bool {
        self.fragments.iter().any(|f| f == fragment)
    }
}
