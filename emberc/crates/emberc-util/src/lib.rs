//! emberc-util - Core Utilities and Foundation Types
//!
//! This crate provides the small set of types shared by every phase of the
//! emberc toolchain:
//!
//! - [`span`] - Source locations as inclusive scalar-value offset ranges
//! - [`diagnostic`] - Error and warning reporting ([`Handler`], [`DiagnosticBuilder`])
//! - [`error`] - Error types for operations on spans and buffers
//!
//! # Example
//!
//! ```
//! use emberc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .span(Span::new(4, 9))
//!     .line(1)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SpanError, SpanResult};
pub use span::Span;
