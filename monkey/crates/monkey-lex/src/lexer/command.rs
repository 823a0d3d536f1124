//! Backtick command lexing.

use monkey_util::{DiagnosticBuilder, DiagnosticCode};

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `` `command` `` literal.
    ///
    /// The enclosed text is kept verbatim, with no escape processing. An
    /// unclosed command takes the rest of the input and is reported.
    pub fn lex_command(&mut self) -> Token {
        self.cursor.advance();

        let start = self.cursor.position();
        self.cursor.eat_while(|c| c != '`');
        let text = self.cursor.slice_from(start);

        if !self.cursor.match_char('`') {
            let span = self.token_span();
            self.report(
                DiagnosticBuilder::error("unterminated backtick command")
                    .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMAND)
                    .span(span)
                    .help("add a closing '`'"),
            );
        }

        self.token(TokenKind::Backtick, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use monkey_util::{DiagnosticCode, Handler};

    #[test]
    fn test_command() {
        let mut handler = Handler::new();
        let token = crate::Lexer::new("`/bin/ls -l`", &mut handler).next_token();
        assert_eq!(token.kind, TokenKind::Backtick);
        assert_eq!(token.literal, "/bin/ls -l");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_command_is_verbatim() {
        let mut handler = Handler::new();
        let token = crate::Lexer::new(r#"`echo "a\n" // x`"#, &mut handler).next_token();
        assert_eq!(token.literal, r#"echo "a\n" // x"#);
    }

    #[test]
    fn test_unterminated_command() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("`uptime\n", &mut handler);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Backtick);
        assert_eq!(token.literal, "uptime\n");
        assert!(lexer.next_token().is_eof());
        drop(lexer);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMAND));
    }
}
