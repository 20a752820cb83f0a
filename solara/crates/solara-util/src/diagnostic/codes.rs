//! Diagnostic codes for categorizing compiler errors.
//!
//! Codes are grouped by phase:
//!
//! | Range | Phase |
//! |-------|-------|
//! | E0001-E0099 | Resources (files, settings) |
//! | E1001-E1099 | Lexer |
//! | E2001-E2099 | Parser |
//!
//! # Examples
//!
//! ```
//! use solara_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.to_string(), "E1006");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Rendered as `{prefix}{number:04}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: &'static str,
    number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric part
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    // Resources

    /// Source file does not exist
    pub const E_SOURCE_NOT_FOUND: Self = Self::new("E", 1);
    /// Source path is not a regular file
    pub const E_SOURCE_NOT_A_FILE: Self = Self::new("E", 2);
    /// Source file could not be read
    pub const E_SOURCE_IO: Self = Self::new("E", 3);

    // Lexer

    /// Digit not valid for the literal's base
    pub const E_LEXER_INVALID_DIGIT: Self = Self::new("E", 1001);
    /// `0x` with no hex digits after it
    pub const E_LEXER_MISSING_HEX_DIGITS: Self = Self::new("E", 1002);
    /// More than one decimal point in a number
    pub const E_LEXER_MULTIPLE_DECIMAL_POINTS: Self = Self::new("E", 1003);
    /// Decimal point in a hexadecimal literal
    pub const E_LEXER_HEX_FLOAT: Self = Self::new("E", 1004);
    /// Block comment not closed before end of input
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);
    /// String literal not closed before end of line
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1006);
    /// Unknown escape sequence in a string literal
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1007);
    /// Character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1008);

    // Parser

    /// Token that cannot start the construct being parsed
    pub const E_PARSER_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// A specific token was required but another was found
    pub const E_PARSER_EXPECTED_TOKEN: Self = Self::new("E", 2002);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}
