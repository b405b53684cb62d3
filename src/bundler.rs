//! A buffered-append utility that defers copying until the very end.

use std::borrow::Cow;
use std::fmt;

/// StringBundler records fragments as they're appended and only copies their contents once, into
/// a string of exactly the right size, when [`build`] is called.
///
/// Appending is cheap: it stores a reference (or takes ownership of an owned string) and bumps a
/// running length. The "pre-sizing" a bundler accepts is a *fragment count* hint, which sizes the
/// slot array up front; the byte length of the result is always known exactly by the time it's
/// built.
///
/// ```
/// use string_bundler_bench::bundler::StringBundler;
///
/// let mut sb = StringBundler::with_capacity(3);
/// sb.append("Hello").append(", ").append(String::from("World"));
///
/// assert_eq!(sb.index(), 3);
/// assert_eq!(sb.length(), 12);
/// assert_eq!(sb.build(), "Hello, World");
/// ```
///
/// [`build`]: StringBundler::build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBundler<'a> {
    fragments: Vec<Cow<'a, str>>,
    length: usize,
}

impl<'a> StringBundler<'a> {
    /// Slot capacity of a bundler created without a hint.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// A bundler with [`DEFAULT_CAPACITY`] slots.
    ///
    /// [`DEFAULT_CAPACITY`]: StringBundler::DEFAULT_CAPACITY
    pub fn new() -> Self {
        StringBundler::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A bundler with room for exactly `fragments` appends before it needs to grow.
    pub fn with_capacity(fragments: usize) -> Self {
        StringBundler {
            fragments: Vec::with_capacity(fragments),
            length: 0,
        }
    }

    /// append records `fragment`. Empty fragments are skipped and don't take a slot.
    pub fn append<S>(&mut self, fragment: S) -> &mut Self
    where
        S: Into<Cow<'a, str>>,
    {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.length += fragment.len();
            self.fragments.push(fragment);
        }
        self
    }

    /// Number of fragments held.
    pub fn index(&self) -> usize {
        self.fragments.len()
    }

    /// Total byte length of the held fragments, ie. the length of the built string.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether nothing (non-empty) has been appended.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragment slots available before the bundler reallocates.
    pub fn capacity(&self) -> usize {
        self.fragments.capacity()
    }

    /// The fragment at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fragments.get(index).map(|f| f.as_ref())
    }

    /// Drops every fragment from `index` on, keeping the first `index`.
    pub fn truncate(&mut self, index: usize) {
        for dropped in self.fragments.drain(index.min(self.fragments.len())..) {
            self.length -= dropped.len();
        }
    }

    /// Drops every fragment, keeping the slot capacity.
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.length = 0;
    }

    /// build joins the fragments into a single string, allocated once with capacity equal to
    /// [`length`].
    ///
    /// [`length`]: StringBundler::length
    pub fn build(&self) -> String {
        match self.fragments.as_slice() {
            [] => String::new(),
            [only] => only.to_string(),
            fragments => {
                let mut out = String::with_capacity(self.length);
                for fragment in fragments {
                    out.push_str(fragment);
                }
                out
            }
        }
    }
}

impl fmt::Display for StringBundler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl<'a> From<StringBundler<'a>> for String {
    fn from(sb: StringBundler<'a>) -> String {
        match sb.fragments.len() {
            1 => sb.fragments.into_iter().next().map(Cow::into_owned).unwrap_or_default(),
            _ => sb.build(),
        }
    }
}

impl<'a, S: Into<Cow<'a, str>>> Extend<S> for StringBundler<'a> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for fragment in iter {
            let _ = self.append(fragment);
        }
    }
}

impl<'a, S: Into<Cow<'a, str>>> std::iter::FromIterator<S> for StringBundler<'a> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut sb = StringBundler::with_capacity(iter.size_hint().0);
        sb.extend(iter);
        sb
    }
}
