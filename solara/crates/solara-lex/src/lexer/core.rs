//! Core lexer implementation.

use std::path::Path;

use solara_util::{
    CompilerContext, DiagnosticBuilder, DiagnosticCode, SourceError, SourceFile, SourceResult,
    Span, StringTable,
};

use crate::chars::{is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for the Solara programming language.
///
/// The lexer owns its source buffer and borrows the [`CompilerContext`] for
/// the whole scan: lexemes are interned into the context's string table and
/// errors go to its diagnostic handler.
///
/// # Example
///
/// ```
/// use solara_lex::{Lexer, TokenKind};
/// use solara_util::CompilerContext;
///
/// let mut ctx = CompilerContext::default();
/// let mut lexer = Lexer::with_source(&mut ctx, "pub module demo;");
///
/// let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Pub, TokenKind::Module, TokenKind::Identifier, TokenKind::Semicolon]
/// );
/// assert!(!lexer.has_errors());
/// ```
pub struct Lexer<'ctx> {
    pub(super) ctx: &'ctx mut CompilerContext,
    pub(super) cursor: Cursor,
    token_start: usize,
    token_line: u32,
    token_column: u32,
    errors: usize,
}

impl<'ctx> Lexer<'ctx> {
    /// Create a lexer with an empty buffer; fill it with [`Lexer::load`]
    pub fn new(ctx: &'ctx mut CompilerContext) -> Self {
        Self::with_source(ctx, String::new())
    }

    /// Create a lexer over in-memory source text
    pub fn with_source(ctx: &'ctx mut CompilerContext, source: impl Into<String>) -> Self {
        Self {
            ctx,
            cursor: Cursor::new(source),
            token_start: 0,
            token_line: 0,
            token_column: 0,
            errors: 0,
        }
    }

    /// Replace the buffer with the contents of `path`, returning its length in bytes
    ///
    /// On failure the buffer is left empty, an error diagnostic is emitted,
    /// and the error is returned.
    pub fn load(&mut self, path: impl AsRef<Path>) -> SourceResult<usize> {
        let path = path.as_ref();
        self.cursor = Cursor::default();

        match SourceFile::load(path) {
            Ok(file) => {
                let len = file.content().len();
                tracing::debug!(path = %path.display(), bytes = len, "loaded source");
                self.cursor = Cursor::new(file.into_content());
                Ok(len)
            }
            Err(err) => {
                let code = match &err {
                    SourceError::NotFound { .. } => DiagnosticCode::E_SOURCE_NOT_FOUND,
                    SourceError::NotAFile { .. } => DiagnosticCode::E_SOURCE_NOT_A_FILE,
                    SourceError::Io { .. } => DiagnosticCode::E_SOURCE_IO,
                };
                DiagnosticBuilder::error(err.to_string())
                    .code(code)
                    .emit(self.ctx.handler());
                Err(err)
            }
        }
    }

    /// The character `offset` characters past the cursor, `None` past the end
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.cursor.peek(offset)
    }

    /// Returns true if a character exists `offset` characters past the cursor
    #[inline]
    pub fn has_next(&self, offset: usize) -> bool {
        self.cursor.has_next(offset)
    }

    /// Returns the next token
    ///
    /// Comments and malformed input are skipped (the latter after being
    /// reported), so this always returns a real token. At end of input it
    /// returns [`TokenKind::End`], and keeps returning the same `End` token
    /// on every later call.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.scan_token() {
                tracing::trace!(
                    target: "solara::lex",
                    token = %token.display(self.ctx.interner()),
                    "scanned"
                );
                return token;
            }
        }
    }

    /// Scan at most one token
    ///
    /// Returns `None` when the scanned text produced no token: a comment or
    /// a lexical error.
    fn scan_token(&mut self) -> Option<Token> {
        self.cursor.eat_while(is_whitespace);
        self.start_token();

        let Some(c) = self.cursor.first() else {
            return Some(Token::new(TokenKind::End, self.cursor.point()));
        };

        match c {
            '/' if matches!(self.cursor.peek(1), Some('/' | '*')) => {
                self.skip_comment();
                None
            }
            '"' => self.scan_string(),
            c if is_ident_start(c) => Some(self.scan_identifier()),
            c if c.is_ascii_digit() => self.scan_number(),
            '.' if self.cursor.peek(1).is_some_and(|n| n.is_ascii_digit()) => self.scan_number(),
            _ => self.scan_symbol(),
        }
    }

    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_line = self.cursor.line();
        self.token_column = self.cursor.column();
    }

    /// Span from the start of the current token to the cursor
    pub(super) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_line,
            self.token_column,
        )
    }

    /// Byte offset where the current token starts
    #[inline]
    pub(super) fn token_start(&self) -> usize {
        self.token_start
    }

    /// Report a lexical error covering the current token
    pub(super) fn report(&mut self, error: LexError) {
        let span = self.token_span();
        self.errors += 1;
        DiagnosticBuilder::error(format!("{} at {}", error, span))
            .code(error.code())
            .span(span)
            .emit(self.ctx.handler());
    }

    /// Returns true if this lexer reported any lexical error
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Number of lexical errors this lexer reported
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Zero-based line of the cursor
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Zero-based column of the cursor
    #[inline]
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Byte offset of the cursor
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The source buffer
    #[inline]
    pub fn source(&self) -> &str {
        self.cursor.source()
    }

    /// The compilation context
    #[inline]
    pub fn context(&self) -> &CompilerContext {
        &*self.ctx
    }

    /// The string table holding token payloads
    #[inline]
    pub fn interner(&self) -> &StringTable {
        self.ctx.interner()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token before [`TokenKind::End`]
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_end_is_sticky() {
        let mut ctx = CompilerContext::default();
        let mut lexer = Lexer::with_source(&mut ctx, "x  ");

        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        let end = lexer.next_token();
        assert!(end.is_end());
        assert_eq!(end.span, Span::point(3, 0, 3));

        let position = lexer.position();
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), end);
            assert_eq!(lexer.position(), position);
        }
    }

    #[test]
    fn test_new_lexer_is_empty() {
        let mut ctx = CompilerContext::default();
        let mut lexer = Lexer::new(&mut ctx);
        assert!(!lexer.has_next(0));
        assert!(lexer.next_token().is_end());
    }

    #[test]
    fn test_peek_and_has_next() {
        let mut ctx = CompilerContext::default();
        let lexer = Lexer::with_source(&mut ctx, "ab");
        assert_eq!(lexer.peek(0), Some('a'));
        assert_eq!(lexer.peek(1), Some('b'));
        assert_eq!(lexer.peek(2), None);
        assert!(lexer.has_next(1));
        assert!(!lexer.has_next(2));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "module m;").unwrap();

        let mut ctx = CompilerContext::default();
        let mut lexer = Lexer::new(&mut ctx);
        assert_eq!(lexer.load(file.path()).unwrap(), 9);
        assert!(lexer.has_next(0));
        assert_eq!(lexer.next_token().kind, TokenKind::Module);
    }

    #[test]
    fn test_load_missing_file() {
        let mut ctx = CompilerContext::default();
        {
            let mut lexer = Lexer::with_source(&mut ctx, "stale");
            let err = lexer.load("/nonexistent/input.sol").unwrap_err();
            assert!(matches!(err, SourceError::NotFound { .. }));
            assert!(!lexer.has_next(0));
            assert!(lexer.next_token().is_end());
            assert!(!lexer.has_errors());
        }
        let diags = ctx.handler().diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_SOURCE_NOT_FOUND));
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = CompilerContext::default();
        let mut lexer = Lexer::new(&mut ctx);
        let err = lexer.load(dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::NotAFile { .. }));
        assert!(!lexer.has_next(0));
        assert!(lexer.context().has_errors());
    }

    #[test]
    fn test_errors_are_counted_and_skipped() {
        let mut ctx = CompilerContext::default();
        let mut lexer = Lexer::with_source(&mut ctx, "a $ b # c");
        let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenKind::Identifier; 3]);
        assert_eq!(lexer.error_count(), 2);
    }

    #[test]
    fn test_error_diagnostic_has_span_and_code() {
        let mut ctx = CompilerContext::default();
        let _ = Lexer::with_source(&mut ctx, "x\n  @").count();

        let diags = ctx.handler().diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diags[0].span, Some(Span::new(4, 5, 1, 2)));
        assert_eq!(diags[0].message, "unexpected character '@' at 2:3");
    }

    #[test]
    fn test_iterator_stops_before_end() {
        let mut ctx = CompilerContext::default();
        let tokens: Vec<_> = Lexer::with_source(&mut ctx, "a b").collect();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| !t.is_end()));
    }
}
