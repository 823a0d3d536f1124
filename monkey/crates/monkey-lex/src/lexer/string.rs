//! String literal lexing.

use monkey_util::{DiagnosticBuilder, DiagnosticCode};

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// The token literal is the decoded value. Recognised escapes are
    /// `\n`, `\t`, `\r`, `\\` and `\"`; any other escaped character is kept
    /// as-is without its backslash and a warning is reported. Strings may
    /// span lines. If the input ends before the closing quote, the text
    /// decoded so far is returned and an error is reported.
    pub fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        let mut value = String::new();

        loop {
            if self.cursor.is_at_end() {
                let span = self.token_span();
                self.report(
                    DiagnosticBuilder::error("unterminated string literal")
                        .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
                        .span(span)
                        .help("add a closing `\"`"),
                );
                break;
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    break;
                },
                '\\' => {
                    if let Some(c) = self.lex_escape() {
                        value.push(c);
                    }
                },
                c => {
                    value.push(c);
                    self.cursor.advance();
                },
            }
        }

        self.token(TokenKind::String, value)
    }

    /// Decodes one escape sequence, cursor on the backslash.
    ///
    /// Returns `None` when the backslash is the last character of input.
    fn lex_escape(&mut self) -> Option<char> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance();

        if self.cursor.is_at_end() {
            return None;
        }

        let c = self.cursor.current_char();
        self.cursor.advance();

        let decoded = match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '\\' => '\\',
            '"' => '"',
            other => {
                let span = self.span_from(start, line, column);
                self.report(
                    DiagnosticBuilder::warning(format!(
                        "unknown escape sequence `\\{}`",
                        other.escape_debug()
                    ))
                    .code(DiagnosticCode::W_LEXER_UNKNOWN_ESCAPE)
                    .span(span)
                    .note("supported escapes are \\n \\t \\r \\\\ and \\\""),
                );
                other
            },
        };
        Some(decoded)
    }
}
