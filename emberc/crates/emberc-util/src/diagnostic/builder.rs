//! Fluent builder for [`Diagnostic`] values.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builder for creating diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use emberc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use emberc_util::span::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unexpected character")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::point(3))
///     .help("try removing the extra character")
///     .build();
/// assert_eq!(diag.span, Span::point(3));
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    line: u32,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            line: 0,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the line of the span's first character
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            line: self.line,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
