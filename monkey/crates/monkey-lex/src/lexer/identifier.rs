//! Identifier, keyword and namespaced-identifier lexing.

use crate::token::{lookup_ident, Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start, is_ident_suffix};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// An identifier is a letter or `_` followed by letters, digits and
    /// `_`, optionally ending in one `?` or `!` (`empty?`, `sort!`). A `!`
    /// directly followed by `=` is left alone so `a!=b` keeps its `!=`.
    ///
    /// When the text is a configured namespace prefix and is followed by
    /// `.` and another identifier, both parts are joined into a single
    /// `Ident` (`math.sqrt`). Namespaced names are never keywords.
    pub fn lex_identifier(&mut self) -> Token {
        self.scan_ident_run();
        let head = self.cursor.slice_from(self.token_start);

        if self.config.is_namespace(head)
            && self.cursor.current_char() == '.'
            && is_ident_start(self.cursor.peek_char(1))
        {
            self.cursor.advance();
            self.scan_ident_run();
            return self.lexeme_token(TokenKind::Ident);
        }

        self.token(lookup_ident(head), head)
    }

    fn scan_ident_run(&mut self) {
        self.cursor.eat_while(is_ident_continue);
        let c = self.cursor.current_char();
        if is_ident_suffix(c) && !(c == '!' && self.cursor.peek_char(1) == '=') {
            self.cursor.advance();
        }
    }
}
