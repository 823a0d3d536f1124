//! Number literal lexing.
//!
//! Literals keep their source spelling; converting `0xFF` to a value is
//! left to the parser.

use monkey_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::unicode::is_digit_in_base;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `0`
    /// - Hexadecimal: `0xFF`, `0X1f`
    /// - Binary: `0b1010`
    /// - Float: `3.14` (a digit must follow the `.`)
    ///
    /// A `.` that is not followed by a digit ends the literal, so `5.len()`
    /// lexes as `Int Period Ident ...`.
    pub fn lex_number(&mut self) -> Token {
        if self.cursor.current_char() == '0' {
            match self.cursor.peek_char(1) {
                'x' | 'X' => return self.lex_prefixed_integer(16),
                'b' | 'B' => return self.lex_prefixed_integer(2),
                _ => {},
            }
        }

        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            return self.lexeme_token(TokenKind::Float);
        }

        self.lexeme_token(TokenKind::Int)
    }

    /// Lexes a `0x`/`0b` integer, cursor on the leading `0`.
    fn lex_prefixed_integer(&mut self, base: u32) -> Token {
        self.cursor.advance_n(2);
        let digits = self.cursor.eat_while(|c| is_digit_in_base(c, base));

        if digits == 0 {
            let prefix = self.cursor.slice_from(self.token_start);
            self.report_error(
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                format!("no digits after `{}` prefix", prefix),
            );
        }

        self.lexeme_token(TokenKind::Int)
    }
}
