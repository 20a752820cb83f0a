//! Lexical error types.
//!
//! Lexical errors are recoverable: the lexer reports each one to the
//! diagnostic handler, skips the offending text, and keeps scanning.

use solara_util::DiagnosticCode;
use thiserror::Error;

use crate::lexer::NumberBase;

/// A lexical error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// A digit or letter that the literal's base does not allow
    #[error("invalid digit '{digit}' in {base} literal")]
    InvalidDigit {
        /// Offending character
        digit: char,
        /// Base the literal was being read in
        base: NumberBase,
    },

    /// `0x` with nothing after it
    #[error("hexadecimal literal has no digits")]
    MissingHexDigits,

    /// A second `.` in one literal
    #[error("numeric literal has more than one decimal point")]
    MultipleDecimalPoints,

    /// A `.` in a hexadecimal literal
    #[error("hexadecimal literal cannot have a decimal point")]
    HexFloat,

    /// End of input inside `/* ... */`
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    /// Newline or end of input before the closing `"`
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Backslash followed by a character with no escape meaning
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// A character that starts no token
    #[error("unexpected character '{}'", .0.escape_debug())]
    UnexpectedChar(char),
}

impl LexError {
    /// Diagnostic code reported with this error
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidDigit { .. } => DiagnosticCode::E_LEXER_INVALID_DIGIT,
            LexError::MissingHexDigits => DiagnosticCode::E_LEXER_MISSING_HEX_DIGITS,
            LexError::MultipleDecimalPoints => DiagnosticCode::E_LEXER_MULTIPLE_DECIMAL_POINTS,
            LexError::HexFloat => DiagnosticCode::E_LEXER_HEX_FLOAT,
            LexError::UnterminatedBlockComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::InvalidEscape(_) => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexError::UnexpectedChar(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }
}

/// Result type alias for lexing
pub type LexResult<T> = std::result::Result<T, LexError>;
