//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or diagnostic starts (zero-based line and
//! column) together with the byte range it covers in the source buffer.
//!
//! # Examples
//!
//! ```
//! use solara_util::span::Span;
//!
//! let span = Span::new(4, 7, 0, 4);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// `line` and `column` are zero-based and describe the first character of
/// the spanned text. `column` counts characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (0-based)
    pub line: u32,
    /// Column number (0-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no source location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (0-based)
    /// * `column` - Column number (0-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset and position
    ///
    /// ```
    /// use solara_util::span::Span;
    ///
    /// let point = Span::point(12, 1, 3);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join two spans into one covering both
    ///
    /// The position of the earlier span is kept.
    ///
    /// ```
    /// use solara_util::span::Span;
    ///
    /// let a = Span::new(0, 3, 0, 0);
    /// let b = Span::new(8, 10, 1, 2);
    /// let joined = a.to(b);
    /// assert_eq!((joined.start, joined.end), (0, 10));
    /// assert_eq!((joined.line, joined.column), (0, 0));
    /// ```
    pub fn to(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

/// Displays as one-based `line:column`, the form editors expect.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 2, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_dummy_is_empty() {
        assert!(Span::DUMMY.is_empty());
        assert_eq!(Span::DUMMY, Span::default());
    }

    #[test]
    fn test_inverted_span_has_zero_len() {
        let span = Span::new(9, 3, 0, 0);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_to_is_symmetric() {
        let a = Span::new(5, 6, 0, 5);
        let b = Span::new(0, 2, 0, 0);
        assert_eq!(a.to(b), b.to(a));
        assert_eq!(a.to(b).column, 0);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Span::point(0, 0, 0).to_string(), "1:1");
        assert_eq!(Span::point(40, 3, 7).to_string(), "4:8");
    }
}
