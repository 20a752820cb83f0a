//! Token definitions for the Solara lexer.
//!
//! A [`Token`] is a small `Copy` value: its [`TokenKind`], an optional
//! [`Symbol`] holding the lexeme of identifiers and literals, and the
//! [`Span`] of its first character.
//!
//! Every kind has one entry in [`TOKEN_INFO`], giving its display name and,
//! for fixed tokens, its canonical spelling. Keyword and operator lookups are
//! built from that table, so adding a token means adding a variant and a row.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use solara_util::{Span, StringTable, Symbol};

/// Token category
///
/// Variants are grouped: sentinels, identifier, keywords, literals,
/// operators, punctuation. The discriminant is the row in [`TOKEN_INFO`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// No token; never produced by the lexer
    None,
    /// End of input
    End,

    /// Identifier
    Identifier,

    /// `break`
    Break,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `default`
    Default,
    /// `else`
    Else,
    /// `for`
    For,
    /// `if`
    If,
    /// `return`
    Return,
    /// `struct`
    Struct,
    /// `switch`
    Switch,
    /// `pub`
    Pub,
    /// `module`
    Module,

    /// Integer literal
    IntLiteral,
    /// Floating point literal
    FloatLiteral,
    /// String literal
    StringLiteral,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,
    /// `%=`
    PercentAssign,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Assign,
    /// `!`
    Bang,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
}

/// Static metadata for one token kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenInfo {
    /// The kind this row describes
    pub kind: TokenKind,
    /// Upper-case name used in traces
    pub name: &'static str,
    /// Source spelling of fixed tokens, `""` for sentinels, identifiers and literals
    pub spelling: &'static str,
}

const fn info(kind: TokenKind, name: &'static str, spelling: &'static str) -> TokenInfo {
    TokenInfo {
        kind,
        name,
        spelling,
    }
}

/// Metadata for every token kind, indexed by discriminant
pub const TOKEN_INFO: &[TokenInfo] = &[
    info(TokenKind::None, "NONE", ""),
    info(TokenKind::End, "END", ""),
    info(TokenKind::Identifier, "IDENTIFIER", ""),
    info(TokenKind::Break, "BREAK", "break"),
    info(TokenKind::Const, "CONST", "const"),
    info(TokenKind::Continue, "CONTINUE", "continue"),
    info(TokenKind::Default, "DEFAULT", "default"),
    info(TokenKind::Else, "ELSE", "else"),
    info(TokenKind::For, "FOR", "for"),
    info(TokenKind::If, "IF", "if"),
    info(TokenKind::Return, "RETURN", "return"),
    info(TokenKind::Struct, "STRUCT", "struct"),
    info(TokenKind::Switch, "SWITCH", "switch"),
    info(TokenKind::Pub, "PUB", "pub"),
    info(TokenKind::Module, "MODULE", "module"),
    info(TokenKind::IntLiteral, "INT_LITERAL", ""),
    info(TokenKind::FloatLiteral, "FLOAT_LITERAL", ""),
    info(TokenKind::StringLiteral, "STRING_LITERAL", ""),
    info(TokenKind::Plus, "PLUS", "+"),
    info(TokenKind::Minus, "MINUS", "-"),
    info(TokenKind::Star, "STAR", "*"),
    info(TokenKind::Slash, "SLASH", "/"),
    info(TokenKind::Percent, "PERCENT", "%"),
    info(TokenKind::PlusAssign, "PLUS_ASSIGN", "+="),
    info(TokenKind::MinusAssign, "MINUS_ASSIGN", "-="),
    info(TokenKind::StarAssign, "STAR_ASSIGN", "*="),
    info(TokenKind::SlashAssign, "SLASH_ASSIGN", "/="),
    info(TokenKind::PercentAssign, "PERCENT_ASSIGN", "%="),
    info(TokenKind::AndAnd, "AND_AND", "&&"),
    info(TokenKind::OrOr, "OR_OR", "||"),
    info(TokenKind::Increment, "INCREMENT", "++"),
    info(TokenKind::Decrement, "DECREMENT", "--"),
    info(TokenKind::EqualEqual, "EQUAL_EQUAL", "=="),
    info(TokenKind::Less, "LESS", "<"),
    info(TokenKind::Greater, "GREATER", ">"),
    info(TokenKind::Assign, "ASSIGN", "="),
    info(TokenKind::Bang, "BANG", "!"),
    info(TokenKind::NotEqual, "NOT_EQUAL", "!="),
    info(TokenKind::LessEqual, "LESS_EQUAL", "<="),
    info(TokenKind::GreaterEqual, "GREATER_EQUAL", ">="),
    info(TokenKind::Shl, "SHL", "<<"),
    info(TokenKind::Shr, "SHR", ">>"),
    info(TokenKind::ShlAssign, "SHL_ASSIGN", "<<="),
    info(TokenKind::ShrAssign, "SHR_ASSIGN", ">>="),
    info(TokenKind::Ampersand, "AMPERSAND", "&"),
    info(TokenKind::Pipe, "PIPE", "|"),
    info(TokenKind::AndAssign, "AND_ASSIGN", "&="),
    info(TokenKind::OrAssign, "OR_ASSIGN", "|="),
    info(TokenKind::LParen, "LPAREN", "("),
    info(TokenKind::RParen, "RPAREN", ")"),
    info(TokenKind::LBracket, "LBRACKET", "["),
    info(TokenKind::RBracket, "RBRACKET", "]"),
    info(TokenKind::LBrace, "LBRACE", "{"),
    info(TokenKind::RBrace, "RBRACE", "}"),
    info(TokenKind::Comma, "COMMA", ","),
    info(TokenKind::Period, "PERIOD", "."),
    info(TokenKind::Colon, "COLON", ":"),
    info(TokenKind::Semicolon, "SEMICOLON", ";"),
];

const fn table_is_in_order() -> bool {
    let mut i = 0;
    while i < TOKEN_INFO.len() {
        if TOKEN_INFO[i].kind as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

static_assertions::const_assert_eq!(TOKEN_INFO.len(), TokenKind::COUNT);
static_assertions::const_assert!(table_is_in_order());
static_assertions::assert_eq_size!(TokenKind, u8);

/// Longest operator or punctuation spelling, in bytes
pub const MAX_SYMBOL_LEN: usize = 3;

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TOKEN_INFO
        .iter()
        .filter(|info| info.kind.is_keyword())
        .map(|info| (info.spelling, info.kind))
        .collect()
});

static SYMBOLS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TOKEN_INFO
        .iter()
        .filter(|info| info.kind.is_operator() || info.kind.is_punctuation())
        .map(|info| (info.spelling, info.kind))
        .collect()
});

impl TokenKind {
    /// Number of token kinds
    pub const COUNT: usize = TokenKind::Semicolon as usize + 1;

    /// Classify a word as a keyword, or [`TokenKind::Identifier`] if it is not one
    ///
    /// The match is exact and case-sensitive.
    ///
    /// ```
    /// use solara_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_keyword("return"), TokenKind::Return);
    /// assert_eq!(TokenKind::from_keyword("Return"), TokenKind::Identifier);
    /// ```
    pub fn from_keyword(text: &str) -> TokenKind {
        KEYWORDS
            .get(text)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// Look up an operator or punctuation spelling
    ///
    /// ```
    /// use solara_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_symbol("<<="), Some(TokenKind::ShlAssign));
    /// assert_eq!(TokenKind::from_symbol("<>"), None);
    /// ```
    pub fn from_symbol(text: &str) -> Option<TokenKind> {
        SYMBOLS.get(text).copied()
    }

    /// Metadata row for this kind
    #[inline]
    pub fn describe(self) -> &'static TokenInfo {
        &TOKEN_INFO[self as usize]
    }

    /// Display name, e.g. `"SHL_ASSIGN"`
    #[inline]
    pub fn name(self) -> &'static str {
        self.describe().name
    }

    /// Canonical spelling, `""` for kinds without one
    #[inline]
    pub fn spelling(self) -> &'static str {
        self.describe().spelling
    }

    /// Returns true for reserved words
    #[inline]
    pub const fn is_keyword(self) -> bool {
        let d = self as u8;
        d >= TokenKind::Break as u8 && d <= TokenKind::Module as u8
    }

    /// Returns true for integer, float, and string literals
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral
        )
    }

    /// Returns true for operators
    #[inline]
    pub const fn is_operator(self) -> bool {
        let d = self as u8;
        d >= TokenKind::Plus as u8 && d <= TokenKind::OrAssign as u8
    }

    /// Returns true for brackets and separators
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        let d = self as u8;
        d >= TokenKind::LParen as u8 && d <= TokenKind::Semicolon as u8
    }

    /// Returns true if tokens of this kind carry their lexeme as a [`Symbol`]
    #[inline]
    pub const fn has_payload(self) -> bool {
        matches!(self, TokenKind::Identifier) || self.is_literal()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.describe();
        if info.spelling.is_empty() {
            f.write_str(&info.name.to_ascii_lowercase().replace('_', " "))
        } else {
            write!(f, "'{}'", info.spelling)
        }
    }
}

/// A classified, position-tagged unit of lexical output
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Category
    pub kind: TokenKind,
    /// Interned lexeme, present exactly when `kind.has_payload()`
    pub symbol: Option<Symbol>,
    /// Location of the first character
    pub span: Span,
}

impl Token {
    /// Create a token without payload
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            symbol: None,
            span,
        }
    }

    /// Create a token carrying an interned lexeme
    #[inline]
    pub const fn with_symbol(kind: TokenKind, symbol: Symbol, span: Span) -> Self {
        Self {
            kind,
            symbol: Some(symbol),
            span,
        }
    }

    /// Returns true for the end-of-input token
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    /// Text of the token: the payload for identifiers and literals, the
    /// canonical spelling otherwise
    pub fn text<'t>(&self, table: &'t StringTable) -> &'t str {
        match self.symbol {
            Some(symbol) => table.resolve(symbol),
            None => self.kind.spelling(),
        }
    }

    /// Render as `NAME 'text' at line:column` (one-based) for traces
    pub fn display<'t>(&self, table: &'t StringTable) -> TokenDisplay<'t> {
        TokenDisplay {
            token: *self,
            table,
        }
    }
}

/// Helper returned by [`Token::display`]
pub struct TokenDisplay<'t> {
    token: Token,
    table: &'t StringTable,
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = &self.token;
        write!(f, "{}", token.kind.name())?;
        let text = token.text(self.table);
        if !text.is_empty() {
            write!(f, " '{}'", text)?;
        }
        write!(f, " at {}", token.span)
    }
}
