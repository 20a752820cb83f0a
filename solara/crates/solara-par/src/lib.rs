//! solara-par - Module Header Parser for the Solara Programming Language
//!
//! This crate pulls tokens from a [`Lexer`] one at a time and recognizes the
//! module declaration that opens every Solara source file:
//!
//! ```text
//! module_decl := "pub"? "module" IDENTIFIER ";"
//! ```
//!
//! # Example Usage
//!
//! ```
//! use solara_lex::Lexer;
//! use solara_par::Parser;
//! use solara_util::CompilerContext;
//!
//! let mut ctx = CompilerContext::default();
//! let mut parser = Parser::new(Lexer::with_source(&mut ctx, "pub module geometry;"));
//!
//! let decl = parser.parse().expect("valid header");
//! assert!(decl.public);
//! assert_eq!(parser.resolve(decl.name), "geometry");
//! assert!(!parser.has_errors());
//! ```
//!
//! # Errors
//!
//! A token other than the one the grammar requires is reported as
//! `E2002 expected X, found Y` and [`Parser::parse`] returns `None`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use solara_lex::{Lexer, Token, TokenKind};
use solara_util::{DiagnosticBuilder, DiagnosticCode, Span, Symbol};

/// A parsed `[pub] module name;` declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDecl {
    /// Whether the declaration starts with `pub`
    pub public: bool,
    /// Module name
    pub name: Symbol,
    /// From the first keyword through the `;`
    pub span: Span,
}

/// Single-token-lookahead parser over a [`Lexer`]
pub struct Parser<'ctx> {
    lexer: Lexer<'ctx>,
    current: Token,
    errors: usize,
}

impl<'ctx> Parser<'ctx> {
    /// Create a parser; no token is read until [`Parser::parse`]
    pub fn new(lexer: Lexer<'ctx>) -> Self {
        Self {
            lexer,
            current: Token::new(TokenKind::None, Span::DUMMY),
            errors: 0,
        }
    }

    /// Parse the module declaration at the start of the input
    pub fn parse(&mut self) -> Option<ModuleDecl> {
        self.consume();
        let start = self.current.span;

        let public = self.current.kind == TokenKind::Pub;
        if public {
            self.consume();
        }

        self.parse_module(public, start)
    }

    fn parse_module(&mut self, public: bool, start: Span) -> Option<ModuleDecl> {
        self.expect(TokenKind::Module)?;
        let name = self.expect(TokenKind::Identifier)?;
        let semi = self.expect(TokenKind::Semicolon)?;

        let decl = ModuleDecl {
            public,
            name: name.symbol?,
            span: start.to(semi.span),
        };
        tracing::info!(
            target: "solara::par",
            module = self.resolve(decl.name),
            public,
            "parsed module declaration"
        );
        Some(decl)
    }

    /// Advance to the next token and return it
    pub fn consume(&mut self) -> Token {
        self.current = self.lexer.next_token();
        tracing::debug!(
            target: "solara::par",
            token = %self.current.display(self.lexer.interner()),
            "consume"
        );
        self.current
    }

    /// Consume the current token if it has kind `kind`
    ///
    /// On a mismatch nothing is consumed, `E2002` is reported at the current
    /// token, and `None` is returned.
    pub fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.current.kind == kind {
            let token = self.current;
            self.consume();
            return Some(token);
        }

        self.errors += 1;
        let found = self.current;
        DiagnosticBuilder::error(format!(
            "expected {}, found {} at {}",
            kind, found.kind, found.span
        ))
        .code(DiagnosticCode::E_PARSER_EXPECTED_TOKEN)
        .span(found.span)
        .emit(self.lexer.context().handler());
        None
    }

    /// The token under the cursor
    #[inline]
    pub fn current(&self) -> Token {
        self.current
    }

    /// Text of an interned symbol
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.lexer.interner().resolve(symbol)
    }

    /// Returns true if the lexer or the parser reported any error
    pub fn has_errors(&self) -> bool {
        self.errors > 0 || self.lexer.has_errors()
    }

    /// Number of syntax errors reported by the parser itself
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Give back the lexer, e.g. to keep scanning past the header
    pub fn into_lexer(self) -> Lexer<'ctx> {
        self.lexer
    }
}
