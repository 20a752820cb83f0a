//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use solara_util::diagnostic::Level;
//!
//! assert!(Level::Critical.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(Level::Info.to_string(), "INFO");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Levels are ordered from least to most severe, so `level >= Level::Warning`
/// selects warnings and everything worse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Internal detail, only interesting when debugging the compiler
    Debug,
    /// Progress information such as traced interning
    Info,
    /// Suspicious input that does not stop compilation
    Warning,
    /// Invalid input; compilation will fail
    Error,
    /// Failure of the compiler's own environment, e.g. an unreadable input file
    Critical,
}

impl Level {
    /// Returns true if this level counts as a compile error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error | Level::Critical)
    }

    /// Upper-case name used in log output
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// The `tracing` level a record of this severity is forwarded at
    ///
    /// `tracing` has no level above `ERROR`, so `Critical` shares it.
    pub const fn to_tracing(&self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warning => tracing::Level::WARN,
            Level::Error | Level::Critical => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
