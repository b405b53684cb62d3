//! Fragment selection policies.
//!
//! A selector picks the N fragments a single measured operation joins. Neither policy mutates the
//! pool, and both always return exactly N fragments.

use crate::error::{Error, Result};
use crate::pool::Pool;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// FixedPrefix selects the first N fragments of the pool, in pool order.
///
/// The selection borrows straight from the pool, so it costs nothing to repeat inside a measured
/// loop and always yields the same fragments:
///
/// ```
/// use string_bundler_bench::{pool::Pool, select::FixedPrefix};
///
/// let pool = Pool::from_fragments(vec!["ab", "cd", "ef"]).unwrap();
/// assert_eq!(FixedPrefix.select(&pool, 2).unwrap(), &["ab", "cd"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPrefix;

impl FixedPrefix {
    /// Returns `pool[..count]`.
    pub fn select<'p>(&self, pool: &'p Pool, count: usize) -> Result<&'p [String]> {
        if count == 0 {
            return Err(Error::ZeroFragmentCount);
        }
        pool.fragments()
            .get(..count)
            .ok_or(Error::FragmentCountExceedsPool {
                count,
                pool: pool.len(),
            })
    }
}

/// RandomizedBatch draws a fresh batch of N fragments for every measured operation, independently
/// and uniformly, with replacement.
///
/// Since fragments are drawn with replacement, N may be larger than the pool.
#[derive(Debug, Clone)]
pub struct RandomizedBatch<R = StdRng> {
    rng: R,
}

impl RandomizedBatch<StdRng> {
    /// A batch selector over a [`StdRng`] seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        RandomizedBatch::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomizedBatch<R> {
    /// Wraps an arbitrary random source.
    pub fn new(rng: R) -> Self {
        RandomizedBatch { rng }
    }

    /// Draws `count` fragments from `pool`. The returned batch borrows from the pool; only the list
    /// of references is allocated.
    ///
    /// ```
    /// use string_bundler_bench::{pool::Pool, select::RandomizedBatch};
    ///
    /// let pool = Pool::from_fragments(vec!["ab", "cd", "ef"]).unwrap();
    /// let batch = RandomizedBatch::seeded(0).select(&pool, 10).unwrap();
    ///
    /// assert_eq!(batch.len(), 10);
    /// assert!(batch.iter().all(|f| pool.contains(f)));
    /// ```
    pub fn select<'p>(&mut self, pool: &'p Pool, count: usize) -> Result<Vec<&'p str>> {
        if count == 0 {
            return Err(Error::ZeroFragmentCount);
        }
        let fragments = pool.fragments();
        if fragments.is_empty() {
            return Err(Error::EmptyPool);
        }

        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            batch.push(fragments[self.rng.gen_range(0..fragments.len())].as_str());
        }
        Ok(batch)
    }
}
