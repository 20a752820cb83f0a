//! String literal lexing.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Value of the character after a backslash, `None` for an unknown escape
fn unescape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}

impl Lexer<'_> {
    /// Lexes a `"..."` string literal.
    ///
    /// The payload is the unescaped content without quotes. A newline or end
    /// of input before the closing quote is an unterminated string; the
    /// newline is not consumed. An unknown escape is reported once, after
    /// the rest of the literal has been skipped.
    pub(super) fn scan_string(&mut self) -> Option<Token> {
        self.cursor.advance();

        let mut value = String::new();
        let mut bad_escape = None;

        loop {
            match self.cursor.first() {
                None | Some('\n') => {
                    self.report(LexError::UnterminatedString);
                    return None;
                }
                Some('"') => {
                    self.cursor.advance();
                    break;
                }
                Some('\\') => {
                    self.cursor.advance();
                    match self.cursor.first() {
                        None | Some('\n') => continue,
                        Some(c) => {
                            self.cursor.advance();
                            match unescape(c) {
                                Some(v) => value.push(v),
                                None => {
                                    bad_escape.get_or_insert(c);
                                }
                            }
                        }
                    }
                }
                Some(c) => {
                    self.cursor.advance();
                    value.push(c);
                }
            }
        }

        if let Some(c) = bad_escape {
            self.report(LexError::InvalidEscape(c));
            return None;
        }

        let span = self.token_span();
        let symbol = self.ctx.intern(&value);
        Some(Token::with_symbol(TokenKind::StringLiteral, symbol, span))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};
    use solara_util::{CompilerContext, DiagnosticCode};

    fn scan(source: &str) -> (CompilerContext, Vec<crate::Token>) {
        let mut ctx = CompilerContext::default();
        let tokens = Lexer::with_source(&mut ctx, source).collect();
        (ctx, tokens)
    }

    #[test]
    fn test_simple_string() {
        let (ctx, tokens) = scan("\"hello world\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(ctx.resolve(tokens[0].symbol.unwrap()), "hello world");
        assert_eq!(tokens[0].span.len(), 13);
    }

    #[test]
    fn test_empty_string() {
        let (ctx, tokens) = scan("\"\"");
        assert_eq!(ctx.resolve(tokens[0].symbol.unwrap()), "");
    }

    #[test]
    fn test_escapes() {
        let (ctx, tokens) = scan(r#""a\n\t\r\0\\\"b""#);
        assert_eq!(ctx.resolve(tokens[0].symbol.unwrap()), "a\n\t\r\0\\\"b");
    }

    #[test]
    fn test_invalid_escape_skips_literal() {
        let (ctx, tokens) = scan(r#"x "bad\q" y"#);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Identifier]);

        let diags = ctx.handler().diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_INVALID_ESCAPE));
    }

    #[test]
    fn test_unterminated_at_newline() {
        let (ctx, tokens) = scan("\"open\nnext");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(
            ctx.handler().diagnostics()[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
    }

    #[test]
    fn test_unterminated_at_end() {
        let (ctx, tokens) = scan("\"open \\");
        assert!(tokens.is_empty());
        assert_eq!(ctx.handler().error_count(), 1);
    }

    #[test]
    fn test_strings_are_interned() {
        let (ctx, tokens) = scan("\"same\" \"same\"");
        assert_eq!(tokens[0].symbol, tokens[1].symbol);
        assert_eq!(ctx.interner().len(), 1);
    }
}
