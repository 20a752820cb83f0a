//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes an identifier or keyword.
    ///
    /// The word is the longest run of `[A-Za-z0-9_]`, so `forfor` is one
    /// identifier rather than two keywords. Keywords carry no payload;
    /// identifiers carry their interned text.
    pub(super) fn scan_identifier(&mut self) -> Token {
        let start = self.token_start();
        self.cursor.eat_while(is_ident_continue);
        let span = self.token_span();

        let text = self.cursor.slice_from(start);
        match TokenKind::from_keyword(text) {
            TokenKind::Identifier => {
                let symbol = self.ctx.intern(text);
                Token::with_symbol(TokenKind::Identifier, symbol, span)
            }
            keyword => Token::new(keyword, span),
        }
    }
}
