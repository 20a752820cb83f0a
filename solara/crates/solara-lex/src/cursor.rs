//! Character cursor over an owned source buffer.
//!
//! The cursor tracks a byte `position` together with a zero-based `line` and
//! `column`. Consuming `\n` moves to the next line and resets the column;
//! any other character advances the column by one. The position never
//! moves backwards.

use solara_util::Span;

/// A cursor for traversing source text character by character
///
/// # Example
///
/// ```
/// use solara_lex::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.advance(), Some('\n'));
/// assert_eq!((cursor.line(), cursor.column()), (1, 0));
/// assert_eq!(cursor.peek(0), Some('b'));
/// assert_eq!(cursor.peek(1), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    source: String,
    position: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    /// Create a cursor at the start of `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            position: 0,
            line: 0,
            column: 0,
        }
    }

    /// The whole buffer
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Byte offset of the next character
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Zero-based line of the next character
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Zero-based column of the next character
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Unconsumed text
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }

    /// Returns true once every character has been consumed
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The character `offset` characters ahead, `None` past the end
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        let rest = self.remaining().as_bytes();
        // ASCII fast path: byte offset equals character offset up to here
        if rest.len() > offset && rest[..=offset].is_ascii() {
            return Some(rest[offset] as char);
        }
        self.remaining().chars().nth(offset)
    }

    /// The next character, `None` at the end
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns true if a character exists `offset` characters ahead
    #[inline]
    pub fn has_next(&self, offset: usize) -> bool {
        self.peek(offset).is_some()
    }

    /// The next `count` characters as one slice, `None` if fewer remain
    pub fn lookahead(&self, count: usize) -> Option<&str> {
        let rest = self.remaining();
        if count == 0 {
            return Some("");
        }
        let mut indices = rest.char_indices().skip(count - 1);
        let (last, c) = indices.next()?;
        Some(&rest[..last + c.len_utf8()])
    }

    /// Consume one character, updating line and column
    pub fn advance(&mut self) -> Option<char> {
        let c = self.first()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume up to `count` characters
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume the next character if it equals `expected`
    pub fn eat(&mut self, expected: char) -> bool {
        if self.first() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.first() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Text from byte offset `start` up to the current position
    #[inline]
    pub fn slice_from(&self, start: usize) -> &str {
        &self.source[start..self.position]
    }

    /// Zero-width span at the current position
    #[inline]
    pub fn point(&self) -> Span {
        Span::point(self.position, self.line, self.column)
    }
}
