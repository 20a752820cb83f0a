//! Number literal lexing.
//!
//! A numeric literal is scanned as one run of ASCII alphanumerics, `_` and
//! `.`, then validated as a whole:
//!
//! | Prefix | Base |
//! |--------|------|
//! | `0x` / `0X` | hexadecimal |
//! | `0` followed by more digits | octal |
//! | anything else | decimal |
//!
//! A single `.` makes the literal floating point; digits after it are
//! decimal. Invalid literals are reported once and skipped entirely.

use std::fmt;

use crate::chars::is_number_continue;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Base a numeric literal is written in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberBase {
    /// Base 8, `0` prefix
    Octal,
    /// Base 10
    Decimal,
    /// Base 16, `0x` prefix
    Hexadecimal,
}

impl NumberBase {
    /// Numeric radix
    pub const fn radix(self) -> u32 {
        match self {
            NumberBase::Octal => 8,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }

    /// Returns true if `c` is a digit in this base
    #[inline]
    pub fn accepts(self, c: char) -> bool {
        c.is_digit(self.radix())
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumberBase::Octal => "octal",
            NumberBase::Decimal => "decimal",
            NumberBase::Hexadecimal => "hexadecimal",
        })
    }
}

/// Validate a complete numeric run and classify it
///
/// ```
/// use solara_lex::{classify_number, LexError, NumberBase, TokenKind};
///
/// assert_eq!(classify_number("0x1F"), Ok(TokenKind::IntLiteral));
/// assert_eq!(classify_number(".5"), Ok(TokenKind::FloatLiteral));
/// assert_eq!(
///     classify_number("08"),
///     Err(LexError::InvalidDigit { digit: '8', base: NumberBase::Octal })
/// );
/// ```
pub fn classify_number(text: &str) -> LexResult<TokenKind> {
    let (base, digits) = if let Some(rest) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        if rest.is_empty() {
            return Err(LexError::MissingHexDigits);
        }
        (NumberBase::Hexadecimal, rest)
    } else if let Some(rest) = text.strip_prefix('0').filter(|rest| !rest.starts_with('.')) {
        (NumberBase::Octal, rest)
    } else {
        (NumberBase::Decimal, text)
    };

    let mut base = base;
    let mut seen_point = false;
    for c in digits.chars() {
        if c == '.' {
            if base == NumberBase::Hexadecimal {
                return Err(LexError::HexFloat);
            }
            if seen_point {
                return Err(LexError::MultipleDecimalPoints);
            }
            seen_point = true;
            base = NumberBase::Decimal;
        } else if !base.accepts(c) {
            return Err(LexError::InvalidDigit { digit: c, base });
        }
    }

    Ok(if seen_point {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntLiteral
    })
}

impl Lexer<'_> {
    /// Lexes a number literal.
    ///
    /// Called at a digit, or at a `.` followed by a digit.
    pub(super) fn scan_number(&mut self) -> Option<Token> {
        let start = self.token_start();
        self.cursor.eat_while(is_number_continue);

        let span = self.token_span();
        let text = self.cursor.slice_from(start);
        match classify_number(text) {
            Ok(kind) => {
                let symbol = self.ctx.intern(text);
                Some(Token::with_symbol(kind, symbol, span))
            }
            Err(err) => {
                self.report(err);
                None
            }
        }
    }
}
