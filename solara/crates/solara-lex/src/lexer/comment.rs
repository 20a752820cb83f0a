//! Comment skipping.

use crate::error::LexError;
use crate::Lexer;

impl Lexer<'_> {
    /// Skips a `//` or `/* */` comment starting at the cursor.
    pub(super) fn skip_comment(&mut self) {
        match self.cursor.peek(1) {
            Some('/') => self.skip_line_comment(),
            Some('*') => self.skip_block_comment(),
            _ => {}
        }
    }

    /// Skips to the end of the line. The newline itself is left for the
    /// whitespace skipper so line tracking stays in one place.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips up to and including the first `*/`. Block comments do not nest.
    fn skip_block_comment(&mut self) {
        self.cursor.advance_by(2);

        loop {
            match (self.cursor.peek(0), self.cursor.peek(1)) {
                (None, _) => {
                    self.report(LexError::UnterminatedBlockComment);
                    return;
                }
                (Some('*'), Some('/')) => {
                    self.cursor.advance_by(2);
                    return;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }
}
