//! String accumulation strategies.
//!
//! Every strategy takes the same ordered fragments and returns their concatenation; only the way
//! the output is accumulated differs. Where a strategy pre-sizes its buffer, computing that size is
//! part of the strategy (and therefore part of whatever is being timed).

use crate::bundler::StringBundler;
use crate::error::Error;
use parking_lot::Mutex;
use std::fmt;
use std::str::FromStr;

/// Strategy names one way of building a string out of fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Repeated immutable concatenation: every step allocates a new string holding the
    /// accumulator and the next fragment, rather than appending in place as `acc + fragment` would.
    NaiveConcat,
    /// A `String` reserved to the summed fragment length up front.
    BufferPresized,
    /// A `String` that grows on demand.
    BufferUnsized,
    /// A lock-wrapped `String` reserved to the summed fragment length.
    SynchronizedPresized,
    /// A lock-wrapped `String` that grows on demand.
    SynchronizedUnsized,
    /// A [`StringBundler`] sized to the fragment count.
    BundlerPresized,
    /// A [`StringBundler`] with its default slot capacity.
    BundlerUnsized,
}

impl Strategy {
    /// All strategies, in reporting order.
    pub const ALL: [Strategy; 7] = [
        Strategy::NaiveConcat,
        Strategy::BufferPresized,
        Strategy::BufferUnsized,
        Strategy::SynchronizedPresized,
        Strategy::SynchronizedUnsized,
        Strategy::BundlerPresized,
        Strategy::BundlerUnsized,
    ];

    /// Stable name, used as the benchmark id.
    pub fn name(self) -> &'static str {
        use Strategy::*;
        match self {
            NaiveConcat => "naive-concat",
            BufferPresized => "buffer-presized",
            BufferUnsized => "buffer-unsized",
            SynchronizedPresized => "synchronized-buffer-presized",
            SynchronizedUnsized => "synchronized-buffer-unsized",
            BundlerPresized => "specialized-bundler-presized",
            BundlerUnsized => "specialized-bundler-unsized",
        }
    }

    /// Whether the strategy reserves space before appending.
    pub fn is_presized(self) -> bool {
        use Strategy::*;
        matches!(
            self,
            BufferPresized | SynchronizedPresized | BundlerPresized
        )
    }

    /// concat joins `fragments` in order.
    ///
    /// ```
    /// use string_bundler_bench::strategy::Strategy;
    ///
    /// for strategy in Strategy::ALL.iter() {
    ///     assert_eq!(strategy.concat(&["ab", "cd", "ef"]), "abcdef");
    /// }
    /// ```
    pub fn concat<S: AsRef<str>>(self, fragments: &[S]) -> String {
        use Strategy::*;
        match self {
            NaiveConcat => naive_concat(fragments),
            BufferPresized => buffer(presized_buffer(fragments), fragments),
            BufferUnsized => buffer(String::new(), fragments),
            SynchronizedPresized => sync_buffer(presized_sync_buffer(fragments), fragments),
            SynchronizedUnsized => sync_buffer(SyncBuffer::new(), fragments),
            BundlerPresized => bundler(StringBundler::with_capacity(fragments.len()), fragments),
            BundlerUnsized => bundler(StringBundler::new(), fragments),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| Error::UnknownStrategy(s.to_owned()))
    }
}

/// Sum of the byte lengths of `fragments`: the exact size of their concatenation.
pub fn total_len<S: AsRef<str>>(fragments: &[S]) -> usize {
    fragments.iter().map(|f| f.as_ref().len()).sum()
}

/// An empty `String` whose capacity already fits all of `fragments`.
pub fn presized_buffer<S: AsRef<str>>(fragments: &[S]) -> String {
    String::with_capacity(total_len(fragments))
}

/// An empty [`SyncBuffer`] whose capacity already fits all of `fragments`.
pub fn presized_sync_buffer<S: AsRef<str>>(fragments: &[S]) -> SyncBuffer {
    SyncBuffer::with_capacity(total_len(fragments))
}

fn naive_concat<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut acc = String::new();
    for fragment in fragments {
        acc = [acc.as_str(), fragment.as_ref()].concat();
    }
    acc
}

fn buffer<S: AsRef<str>>(mut out: String, fragments: &[S]) -> String {
    for fragment in fragments {
        out.push_str(fragment.as_ref());
    }
    out
}

fn sync_buffer<S: AsRef<str>>(out: SyncBuffer, fragments: &[S]) -> String {
    for fragment in fragments {
        out.append(fragment.as_ref());
    }
    out.into_string()
}

fn bundler<'a, S: AsRef<str>>(mut sb: StringBundler<'a>, fragments: &'a [S]) -> String {
    for fragment in fragments {
        let _ = sb.append(fragment.as_ref());
    }
    sb.build()
}

/// SyncBuffer is a `String` behind a lock, taken on every append.
///
/// Nothing ever shares one across threads here; it exists to put a price on incidental
/// synchronization.
#[derive(Debug, Default)]
pub struct SyncBuffer {
    inner: Mutex<String>,
}

impl SyncBuffer {
    /// An empty buffer that grows on demand.
    pub fn new() -> Self {
        SyncBuffer::default()
    }

    /// An empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        SyncBuffer {
            inner: Mutex::new(String::with_capacity(capacity)),
        }
    }

    /// Appends `s` under the lock.
    pub fn append(&self, s: &str) {
        self.inner.lock().push_str(s);
    }

    /// Current capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Current length in bytes.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Releases the buffered string.
    pub fn into_string(self) -> String {
        self.inner.into_inner()
    }
}
