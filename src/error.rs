use thiserror::Error;

/// Error represents the ways a benchmark sweep can be misconfigured.
///
/// None of these are recoverable: a benchmark run that hits one of them should stop before any
/// timing begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The sweep has no fragment counts to measure.
    #[error("no fragment counts configured")]
    EmptyParameterSet,
    /// A fragment count of zero, which would measure nothing.
    #[error("fragment count must be at least 1")]
    ZeroFragmentCount,
    /// The fragment length range is inverted, ex. `min = 100, max = 10`.
    #[error("invalid fragment length bounds: min {min} > max {max}")]
    InvalidLengthBounds {
        /// Configured lower bound
        min: usize,
        /// Configured upper bound
        max: usize,
    },
    /// The fragment pool has no fragments to select from.
    #[error("fragment pool is empty")]
    EmptyPool,
    /// A fixed-prefix selection asked for more fragments than the pool holds.
    #[error("fragment count {count} exceeds pool size {pool}")]
    FragmentCountExceedsPool {
        /// Requested fragment count
        count: usize,
        /// Number of fragments in the pool
        pool: usize,
    },
    /// A strategy name that doesn't match any known [`Strategy`].
    ///
    /// [`Strategy`]: crate::strategy::Strategy
    #[error("unknown strategy: {0:?}")]
    UnknownStrategy(String),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
