//! Character classes used by the lexer.
//!
//! Solara source is scanned byte-for-character over ASCII; any non-ASCII
//! character outside a string or comment is an unexpected character.

/// Characters skipped between tokens
///
/// NUL is whitespace; end of input is decided by the buffer length.
#[inline]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\0')
}

/// First character of an identifier or keyword: `[A-Za-z_]`
#[inline]
pub const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Later characters of an identifier or keyword: `[A-Za-z0-9_]`
#[inline]
pub const fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that extend a numeric literal
///
/// The run is taken as a whole and validated afterwards, so `0x1G` or
/// `1.2.3` is one bad literal rather than several tokens.
#[inline]
pub const fn is_number_continue(c: char) -> bool {
    is_ident_continue(c) || c == '.'
}
