//! Lexer module.
//!
//! The implementation is split by token family:
//! - `core` - the `Lexer` struct, source loading, and dispatch
//! - `identifier` - identifiers and keywords
//! - `number` - integer and floating point literals
//! - `string` - string literals and escapes
//! - `operator` - longest-match operators and punctuation
//! - `comment` - line and block comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use number::{classify_number, NumberBase};
