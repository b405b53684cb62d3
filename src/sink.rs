//! Result consumption for benchmark loops.

use std::hint::black_box;

/// Sink consumes benchmark results so the optimizer can't drop the work that produced them.
///
/// Each consumed string's length is folded into an accumulator that passes through
/// [`black_box`], then the string itself is dropped.
///
/// ```
/// use string_bundler_bench::sink::Sink;
///
/// let mut sink = Sink::default();
/// sink.consume(String::from("abc"));
/// sink.consume(String::from("de"));
///
/// assert_eq!(sink.consumed(), 2);
/// assert_eq!(sink.bytes(), 5);
/// ```
#[derive(Debug, Default)]
pub struct Sink {
    consumed: u64,
    bytes: u64,
}

impl Sink {
    /// Takes ownership of `result` and records it.
    pub fn consume(&mut self, result: String) {
        let result = black_box(result);
        self.consumed += 1;
        self.bytes = black_box(self.bytes.wrapping_add(result.len() as u64));
    }

    /// Number of results consumed.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Total length of every result consumed.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}
