//! Core error types for solara-util crate
//!
//! This module defines the recoverable errors surfaced by the util crate.
//! Lexical errors live with the lexer; these cover resources and settings.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading source files
#[derive(Debug, Error)]
pub enum SourceError {
    /// The path does not exist
    #[error("source file not found: {}", path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// The path exists but is a directory, socket, or other non-regular file
    #[error("not a regular file: {}", path.display())]
    NotAFile {
        /// Requested path
        path: PathBuf,
    },

    /// The file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Requested path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// The path the failed operation was attempted on
    pub fn path(&self) -> &std::path::Path {
        match self {
            SourceError::NotFound { path }
            | SourceError::NotAFile { path }
            | SourceError::Io { path, .. } => path,
        }
    }
}

/// Error type for settings operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read
    #[error("failed to read settings file {}: {source}", path.display())]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid TOML or has wrongly typed fields
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The log file named in the settings could not be created
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Error type for string table lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The handle was never issued by this table
    #[error("invalid symbol handle {index} (table holds {len} strings)")]
    InvalidHandle {
        /// Raw handle value
        index: u32,
        /// Number of strings in the table at lookup time
        len: usize,
    },
}

/// Result type alias for source loading
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type alias for settings operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for string table lookups
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
