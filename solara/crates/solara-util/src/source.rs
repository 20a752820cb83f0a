//! Loading source files.
//!
//! The whole file is read into memory at once; there is no streaming.
//! [`SourceFile::load`] distinguishes the failure modes callers report on:
//! a missing path, a path that is not a regular file, and an I/O failure.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{SourceError, SourceResult};

/// A source file loaded into memory
///
/// # Examples
///
/// ```
/// use solara_util::source::SourceFile;
///
/// let file = SourceFile::new("main.sol", "module main;");
/// assert_eq!(file.content(), "module main;");
/// assert_eq!(file.line(0), Some("module main;"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    /// Create a source file from in-memory text
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a whole file from disk
    ///
    /// # Errors
    ///
    /// - [`SourceError::NotFound`] if nothing exists at `path`
    /// - [`SourceError::NotAFile`] if `path` is a directory or other special file
    /// - [`SourceError::Io`] if the file cannot be opened, read, or is not UTF-8
    pub fn load(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        if !metadata.is_file() {
            return Err(SourceError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(path, content))
    }

    /// Path the file was loaded from
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text of a zero-based line without its line terminator
    pub fn line(&self, line: usize) -> Option<&str> {
        self.content
            .split('\n')
            .nth(line)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }

    /// Consume the file, returning its content
    #[inline]
    pub fn into_content(self) -> String {
        self.content
    }
}
