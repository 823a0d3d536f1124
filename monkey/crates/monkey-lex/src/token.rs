//! Token definitions for the Monkey language.
//!
//! A [`Token`] is a [`TokenKind`] tag plus the literal text it was built
//! from and the [`Span`] where it starts. Keyword lookup goes through a
//! static table, see [`lookup_ident`].

use std::fmt;
use std::sync::OnceLock;

use monkey_util::{FxHashMap, Span};

/// The closed set of token tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Sentinels =====
    /// A character that starts no token
    Illegal,
    /// End of input
    Eof,

    // ===== Literals =====
    /// Identifier, possibly namespaced (`math.sqrt`)
    Ident,
    /// Integer literal, source text kept verbatim (`10`, `0xFF`, `0b101`)
    Int,
    /// Floating point literal (`1.2`)
    Float,
    /// String literal with escapes decoded
    String,
    /// Backtick command text, kept verbatim
    Backtick,

    // ===== Operators =====
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Mod,
    /// `**`
    Pow,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `+=`
    PlusEquals,
    /// `-=`
    MinusEquals,
    /// `*=`
    AsteriskEquals,
    /// `/=`
    SlashEquals,
    /// `<`
    Lt,
    /// `<=`
    LtEquals,
    /// `>`
    Gt,
    /// `>=`
    GtEquals,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // ===== Delimiters =====
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Period,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // ===== Keywords =====
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `for`
    For,
}

impl TokenKind {
    /// Returns the conventional tag name used when printing token streams.
    ///
    /// Literal kinds and keywords print as upper-case names, operators and
    /// delimiters print as their own spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Backtick => "`",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Mod => "%",
            TokenKind::Pow => "**",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::AsteriskEquals => "*=",
            TokenKind::SlashEquals => "/=",
            TokenKind::Lt => "<",
            TokenKind::LtEquals => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEquals => ">=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Period => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::For => "FOR",
        }
    }

    /// Returns true if this kind is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::For
        )
    }

    /// Returns true if this kind is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Backtick
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical token.
///
/// # Example
///
/// ```
/// use monkey_lex::{Token, TokenKind};
/// use monkey_util::Span;
///
/// let token = Token::new(TokenKind::Int, "0x10", Span::new(0, 4, 1, 1));
/// assert_eq!(token.kind, TokenKind::Int);
/// assert_eq!(token.literal, "0x10");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token tag
    pub kind: TokenKind,
    /// Source text, or the decoded value for strings
    pub literal: String,
    /// Where the token starts in the source
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Creates the end-of-input token at `span`.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, String::new(), span)
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        [
            ("fn", TokenKind::Function),
            ("let", TokenKind::Let),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("return", TokenKind::Return),
            ("for", TokenKind::For),
        ]
        .into_iter()
        .collect()
    })
}

/// Looks up a reserved word.
///
/// # Example
///
/// ```
/// use monkey_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("fn"), Some(TokenKind::Function));
/// assert_eq!(keyword_from_ident("function"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    keywords().get(ident).copied()
}

/// Classifies identifier text: the keyword kind if reserved, else `Ident`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keyword_from_ident(ident).unwrap_or(TokenKind::Ident)
}
