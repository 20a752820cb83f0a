//! The per-compilation context.
//!
//! A [`CompilerContext`] owns everything the phases of one compilation
//! share: the [`Settings`], the [`StringTable`], and the diagnostic
//! [`Handler`]. It is created once by the driver and passed down by
//! reference; there is no global instance.

use crate::diagnostic::{DiagnosticBuilder, Handler};
use crate::error::ConfigResult;
use crate::settings::Settings;
use crate::symbol::{StringTable, Symbol};

/// State shared by every phase of one compilation
#[derive(Debug)]
pub struct CompilerContext {
    settings: Settings,
    interner: StringTable,
    handler: Handler,
}

impl CompilerContext {
    /// Create a context whose diagnostics go to `tracing` only
    ///
    /// `settings.log_file` is ignored here; use
    /// [`CompilerContext::from_settings`] to honor it.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            interner: StringTable::new(),
            handler: Handler::new(),
        }
    }

    /// Create a context, opening the log file named in `settings` if any
    pub fn from_settings(settings: Settings) -> ConfigResult<Self> {
        let handler = match &settings.log_file {
            Some(path) => Handler::with_log_file(path)?,
            None => Handler::new(),
        };

        Ok(Self {
            settings,
            interner: StringTable::new(),
            handler,
        })
    }

    /// Intern a string in this compilation's table
    ///
    /// With `trace_interning` enabled, a newly added string is reported as an
    /// `Info` diagnostic reading `[index]: text`.
    pub fn intern(&mut self, text: &str) -> Symbol {
        let (symbol, added) = self.interner.intern_full(text);
        if added && self.settings.trace_interning {
            DiagnosticBuilder::info(format!("[{}]: {}", symbol.as_u32(), text))
                .emit(&self.handler);
        }
        symbol
    }

    /// Get the text of a symbol, `""` if this context never issued it
    #[inline]
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.interner.resolve(symbol)
    }

    /// The settings this compilation runs with
    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The string table
    #[inline]
    pub fn interner(&self) -> &StringTable {
        &self.interner
    }

    /// The diagnostic handler
    #[inline]
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Returns true if any error has been reported so far
    pub fn has_errors(&self) -> bool {
        self.handler.has_errors()
    }
}

impl Default for CompilerContext {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
