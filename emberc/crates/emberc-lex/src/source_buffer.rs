//! Immutable, randomly indexable source text.
//!
//! The buffer is materialized once from the whole source before scanning
//! starts. Offsets count Unicode scalar values, so every offset names one
//! `char` and spans never split a code point.

use std::fmt;

use emberc_util::{Span, SpanError, SpanResult};

/// The character buffer a [`Scanner`](crate::Scanner) walks over.
///
/// # Example
///
/// ```
/// use emberc_lex::SourceBuffer;
/// use emberc_util::Span;
///
/// let buffer = SourceBuffer::new("héllo");
/// assert_eq!(buffer.len(), 5);
/// assert_eq!(buffer.get(1), Some('é'));
/// assert_eq!(buffer.get(5), None);
/// assert_eq!(buffer.text(Span::new(1, 3)).unwrap(), "éll");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    chars: Vec<char>,
}

impl SourceBuffer {
    /// Builds the buffer from the full source text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
        }
    }

    /// Number of scalar values in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the buffer holds no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `offset`, or `None` at and past the end.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// Characters covered by `span`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Reversed`] if `span.start > span.end`, and
    /// [`SpanError::OutOfBounds`] if the span reaches past the last character.
    pub fn slice(&self, span: Span) -> SpanResult<&[char]> {
        if span.start > span.end {
            return Err(SpanError::Reversed {
                start: span.start,
                end: span.end,
            });
        }
        if span.end >= self.chars.len() {
            return Err(SpanError::OutOfBounds {
                start: span.start,
                end: span.end,
                len: self.chars.len(),
            });
        }
        Ok(&self.chars[span.range()])
    }

    /// Text covered by `span`, as an owned `String`.
    pub fn text(&self, span: Span) -> SpanResult<String> {
        self.slice(span).map(|chars| chars.iter().collect())
    }
}

impl fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("len", &self.chars.len())
            .finish()
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
