//! Core error types for emberc-util crate
//!
//! This module defines error types used when resolving spans against a
//! source buffer.

use thiserror::Error;

/// Error type for span resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// Span ends before it starts
    #[error("Invalid span: start {start} > end {end}")]
    Reversed {
        /// Start offset of the rejected span
        start: usize,
        /// End offset of the rejected span
        end: usize,
    },

    /// Span reaches past the end of the buffer
    #[error("Span out of bounds: buffer has {len} characters, span is {start}..={end}")]
    OutOfBounds {
        /// Start offset of the rejected span
        start: usize,
        /// End offset of the rejected span
        end: usize,
        /// Length of the buffer the span was resolved against
        len: usize,
    },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
