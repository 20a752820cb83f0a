//! Diagnostic module - Leveled records and the handler that collects them.
//!
//! Every phase of the compiler reports problems through a [`Handler`]. A
//! [`Diagnostic`] carries a [`Level`], a local timestamp, free text, and
//! optionally a [`Span`] and a [`DiagnosticCode`].
//!
//! Emitting a diagnostic does three things:
//!
//! 1. stores it in the handler for later queries ([`Handler::has_errors`])
//! 2. forwards it as a `tracing` event under the `solara::diagnostic` target
//! 3. appends it to the log file, if one was configured
//!
//! # Examples
//!
//! ```
//! use solara_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use solara_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::point(10, 2, 4))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::{Ref, RefCell};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::{ConfigError, ConfigResult};
use crate::Span;

/// `strftime` pattern for the timestamp prefix of a rendered record
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A diagnostic message with severity, time, and optional location
///
/// Renders as `[YYYY-MM-DD HH:MM:SS] LEVEL: message`.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// Free-form message
    pub message: String,
    /// Source location, if the record concerns one
    pub span: Option<Span>,
    /// Stable code, if any
    pub code: Option<DiagnosticCode>,
    /// Local time the record was created
    pub timestamp: DateTime<Local>,
}

impl Diagnostic {
    /// Create a diagnostic stamped with the current local time
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            code: None,
            timestamp: Local::now(),
        }
    }

    /// Returns true if this record counts as a compile error
    #[inline]
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}

macro_rules! forward_to_tracing {
    ($level:expr, $diag:expr) => {
        tracing::event!(
            target: "solara::diagnostic",
            $level,
            code = $diag.code.map(tracing::field::display),
            span = $diag.span.map(tracing::field::display),
            "{}",
            $diag.message
        )
    };
}

/// Collects diagnostics for one compilation
///
/// The handler is shared by reference between phases, so its state sits in
/// `RefCell`s and every method takes `&self`.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    log_file: Option<RefCell<File>>,
}

impl Handler {
    /// Create a handler that only collects and forwards to `tracing`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that also appends every record to `path`
    ///
    /// The file is created if missing and appended to otherwise. Each record
    /// is flushed as it is written.
    pub fn with_log_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            diagnostics: RefCell::new(Vec::new()),
            log_file: Some(RefCell::new(file)),
        })
    }

    /// Record a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Debug => forward_to_tracing!(tracing::Level::DEBUG, diagnostic),
            Level::Info => forward_to_tracing!(tracing::Level::INFO, diagnostic),
            Level::Warning => forward_to_tracing!(tracing::Level::WARN, diagnostic),
            Level::Error | Level::Critical => {
                forward_to_tracing!(tracing::Level::ERROR, diagnostic)
            }
        }

        if let Some(file) = &self.log_file {
            let mut file = file.borrow_mut();
            if let Err(err) = writeln!(file, "{}", diagnostic).and_then(|()| file.flush()) {
                tracing::warn!(error = %err, "failed to write diagnostic to log file");
            }
        }

        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any error or critical record was emitted
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(Diagnostic::is_error)
    }

    /// Number of error and critical records
    pub fn error_count(&self) -> usize {
        self.count_where(Diagnostic::is_error)
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.count_where(|d| d.level == Level::Warning)
    }

    fn count_where(&self, pred: impl Fn(&Diagnostic) -> bool) -> usize {
        self.diagnostics.borrow().iter().filter(|d| pred(d)).count()
    }

    /// Total number of records of any level
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if nothing was emitted
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Borrow the records emitted so far, in emission order
    pub fn diagnostics(&self) -> Ref<'_, [Diagnostic]> {
        Ref::map(self.diagnostics.borrow(), Vec::as_slice)
    }

    /// Remove and return all records
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Returns true if a log file sink is attached
    pub fn has_log_file(&self) -> bool {
        self.log_file.is_some()
    }
}
