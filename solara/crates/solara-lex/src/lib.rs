//! solara-lex - Lexical Analyzer for the Solara Programming Language
//!
//! This crate turns Solara source text into a stream of classified,
//! position-tagged tokens.
//!
//! # Example Usage
//!
//! ```
//! use solara_lex::{Lexer, TokenKind};
//! use solara_util::CompilerContext;
//!
//! let mut ctx = CompilerContext::default();
//! let mut lexer = Lexer::with_source(&mut ctx, "count += 0x1F; // bump");
//!
//! let first = lexer.next_token();
//! assert_eq!(first.kind, TokenKind::Identifier);
//! assert_eq!(lexer.interner().resolve(first.symbol.unwrap()), "count");
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::PlusAssign);
//! assert_eq!(lexer.next_token().kind, TokenKind::IntLiteral);
//! assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
//! assert!(lexer.next_token().is_end());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds, the metadata table, and [`Token`]
//! - [`lexer`] - the [`Lexer`]
//! - [`cursor`] - character cursor with line/column tracking
//! - [`error`] - [`LexError`]
//! - [`chars`] - character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `break`, `const`, `continue`, `default`, `else`, `for`, `if`, `return`,
//! `struct`, `switch`, `pub`, `module`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0x1F`, `017` (octal), `0`
//! - **Float**: `3.14`, `.5`
//! - **String**: `"hello\n"` with escapes `\n \t \r \0 \\ \"`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+ - * / %` and `+= -= *= /= %=`
//! - **Increment**: `++ --`
//! - **Comparison**: `== != < > <= >=`
//! - **Logical**: `&& || !`
//! - **Bitwise**: `& | &= |= << >> <<= >>=`
//! - **Assignment**: `=`
//!
//! ## Punctuation
//!
//! `( ) [ ] { } , . : ;`
//!
//! # Errors
//!
//! Malformed input never stops the lexer. Each error is reported to the
//! context's diagnostic handler and the offending text is skipped;
//! [`Lexer::has_errors`] tells the caller whether that happened.

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{classify_number, Lexer, NumberBase};
pub use token::{Token, TokenDisplay, TokenInfo, TokenKind, MAX_SYMBOL_LEN, TOKEN_INFO};
