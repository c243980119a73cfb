//! Span module - Source location tracking.
//!
//! A [`Span`] delimits a lexeme by the offsets of its first and last
//! character. Offsets count Unicode scalar values, not bytes, and both ends
//! are inclusive.
//!
//! # Examples
//!
//! ```
//! use emberc_util::span::Span;
//!
//! // "let" at the start of a buffer
//! let span = Span::new(0, 2);
//! assert_eq!(span.len(), 3);
//!
//! // end-of-input marker for a 12 character buffer
//! let eof = Span::point(12);
//! assert_eq!(eof.start, eof.end);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

/// Source location span
///
/// A `Span` is the inclusive range `start..=end`. A single-character lexeme
/// has `start == end`. The end-of-input marker reuses the same shape at the
/// buffer length, where it covers no character at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Offset of the first character
    pub start: usize,
    /// Offset of the last character
    pub end: usize,
}

static_assertions::assert_impl_all!(Span: Send, Sync, Copy);
static_assertions::assert_eq_size!(Span, (usize, usize));

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use emberc_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span at a single offset
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the number of characters covered by the span
    ///
    /// The end-of-input marker `Span::point(len)` also reports 1 even though
    /// it covers no character; use `Token::lexeme_len` in `emberc-lex` when
    /// the lexeme length is wanted.
    ///
    /// # Examples
    ///
    /// ```
    /// use emberc_util::span::Span;
    ///
    /// assert_eq!(Span::new(10, 20).len(), 11);
    /// assert_eq!(Span::point(4).len(), 1);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    /// Returns true if `start > end`, which no well-formed span has
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Check if this span contains an offset
    ///
    /// # Examples
    ///
    /// ```
    /// use emberc_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert!(span.contains(20));
    /// assert!(!span.contains(21));
    /// ```
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Returns the span as a `RangeInclusive` usable for slicing
    #[inline]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl From<RangeInclusive<usize>> for Span {
    fn from(range: RangeInclusive<usize>) -> Self {
        Span::new(*range.start(), *range.end())
    }
}
