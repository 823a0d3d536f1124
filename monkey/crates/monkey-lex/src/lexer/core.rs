//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the per-token dispatch on the
//! leading character, and diagnostic reporting.

use monkey_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::trace;

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Lexer for the Monkey language.
///
/// Pull-based: each [`Lexer::next_token`] call skips whitespace, comments
/// and (on the first call) a byte-order mark and shebang line, then scans
/// exactly one token. Malformed input never stops the lexer; it yields
/// [`TokenKind::Illegal`] tokens and reports diagnostics to the handler.
///
/// # Example
///
/// ```
/// use monkey_lex::{Lexer, TokenKind};
/// use monkey_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("let x = 5;", &mut handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "x");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for lexical errors and warnings.
    pub(crate) handler: &'a mut Handler,

    /// Namespace prefixes and other settings.
    pub(crate) config: LexerConfig,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the byte-order mark and shebang line have been handled.
    pub(crate) prologue_checked: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self::with_config(source, LexerConfig::default(), handler)
    }

    /// Creates a lexer with an explicit configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::{Lexer, LexerConfig, TokenKind};
    /// use monkey_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let config = LexerConfig::empty();
    /// let mut lexer = Lexer::with_config("math.sqrt", config, &mut handler);
    ///
    /// assert_eq!(lexer.next_token().literal, "math");
    /// assert_eq!(lexer.next_token().kind, TokenKind::Period);
    /// ```
    pub fn with_config(source: &'a str, config: LexerConfig, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            prologue_checked: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// At the end of input this returns an `Eof` token with an empty
    /// literal, and keeps doing so on every later call without moving the
    /// cursor or reporting anything.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::eof(self.token_span());
        }

        let token = match self.cursor.current_char() {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            ':' => self.single(TokenKind::Colon),
            '.' => self.single(TokenKind::Period),
            '%' => self.single(TokenKind::Mod),
            '=' => self.lex_equals(),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => self.lex_string(),
            '`' => self.lex_command(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => {
                self.cursor.advance();
                self.report_error(
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                    format!("unexpected character '{}'", c.escape_debug()),
                );
                self.token(TokenKind::Illegal, c.to_string())
            },
        };

        trace!(
            kind = %token.kind,
            literal = ?token.literal,
            line = token.span.line,
            column = token.span.column,
            "token"
        );
        token
    }

    /// Consumes one character and returns it as a token of `kind`.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.lexeme_token(kind)
    }

    /// Builds a token whose literal is the source text scanned so far.
    pub(crate) fn lexeme_token(&self, kind: TokenKind) -> Token {
        self.token(kind, self.cursor.slice_from(self.token_start))
    }

    /// Builds a token spanning from the token start to the cursor.
    pub(crate) fn token(&self, kind: TokenKind, literal: impl Into<String>) -> Token {
        Token::new(kind, literal, self.token_span())
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Span from a saved position to the cursor.
    pub(crate) fn span_from(&self, start: usize, line: u32, column: u32) -> Span {
        Span::new(start, self.cursor.position(), line, column)
    }

    /// Reports an error covering the current token.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let span = self.token_span();
        self.report(DiagnosticBuilder::error(message).code(code).span(span));
    }

    /// Emits a prepared diagnostic.
    pub(crate) fn report(&mut self, diagnostic: DiagnosticBuilder) {
        diagnostic.emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the configuration this lexer was built with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields tokens up to, not including, `Eof`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
