//! solara-util - Core Utilities and Foundation Types
//!
//! This crate provides the shared infrastructure every phase of the Solara
//! compiler is built on:
//!
//! - [`symbol`] - string interning ([`StringTable`], [`Symbol`])
//! - [`diagnostic`] - leveled diagnostic records and the [`Handler`] sink
//! - [`span`] - source positions attached to tokens and diagnostics
//! - [`source`] - loading source files into memory
//! - [`settings`] - per-compilation settings read from TOML
//! - [`context`] - the [`CompilerContext`] that owns all of the above
//!
//! # Example
//!
//! ```
//! use solara_util::{CompilerContext, Settings};
//!
//! let mut ctx = CompilerContext::new(Settings::default());
//! let main = ctx.intern("main");
//!
//! assert_eq!(ctx.intern("main"), main);
//! assert_eq!(ctx.resolve(main), "main");
//! ```
//!
//! The context is an explicit value. Two contexts in the same process share
//! nothing, so independent compilations never observe each other's symbols
//! or diagnostics.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod context;
pub mod diagnostic;
pub mod error;
pub mod settings;
pub mod source;
pub mod span;
pub mod symbol;

pub use context::CompilerContext;
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{
    ConfigError, ConfigResult, SourceError, SourceResult, SymbolError, SymbolResult,
};
pub use settings::Settings;
pub use source::SourceFile;
pub use span::Span;
pub use symbol::{InternerStats, SharedStringTable, StringTable, Symbol};

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
