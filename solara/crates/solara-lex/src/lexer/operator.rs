//! Operator and punctuation lexing.

use crate::error::LexError;
use crate::token::{Token, TokenKind, MAX_SYMBOL_LEN};
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes an operator or punctuation token by longest match.
    ///
    /// Tries the next three characters against the spelling table, then
    /// two, then one, so `<<=` wins over `<<` and `<`. A character that
    /// starts no spelling is reported and skipped.
    pub(super) fn scan_symbol(&mut self) -> Option<Token> {
        for len in (1..=MAX_SYMBOL_LEN).rev() {
            let kind = self.cursor.lookahead(len).and_then(TokenKind::from_symbol);
            if let Some(kind) = kind {
                self.cursor.advance_by(len);
                return Some(Token::new(kind, self.token_span()));
            }
        }

        let c = self.cursor.advance()?;
        self.report(LexError::UnexpectedChar(c));
        None
    }
}
