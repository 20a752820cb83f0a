//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builder for a [`Diagnostic`]
///
/// The timestamp is taken when the builder is finished, not when it is
/// created.
///
/// # Examples
///
/// ```
/// use solara_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use solara_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character '$'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::point(4, 0, 4))
///     .emit(&handler);
///
/// assert!(handler.has_errors());
/// ```
#[must_use = "a diagnostic builder does nothing until built or emitted"]
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Option<Span>,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            code: None,
        }
    }

    /// Start a debug record
    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(Level::Debug, message)
    }

    /// Start an informational record
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// Start a warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Start an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a critical error
    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Level::Critical, message)
    }

    /// Attach a source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Finish the diagnostic, stamping it with the current local time
    pub fn build(self) -> Diagnostic {
        let mut diagnostic = Diagnostic::new(self.level, self.message);
        diagnostic.span = self.span;
        diagnostic.code = self.code;
        diagnostic
    }

    /// Finish the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}
