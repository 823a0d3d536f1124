//! Trivia skipping: whitespace, comments, byte-order mark and shebang.

use monkey_util::{DiagnosticBuilder, DiagnosticCode};
use tracing::debug;

use crate::unicode::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips everything that is not part of a token.
    ///
    /// On the first call a leading byte-order mark and a `#!` line are
    /// dropped. After that, whitespace, `//` line comments and `/* */`
    /// block comments are skipped until a token character or the end of
    /// input is reached.
    pub fn skip_whitespace_and_comments(&mut self) {
        if !self.prologue_checked {
            self.prologue_checked = true;
            self.skip_prologue();
        }

        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                c if is_whitespace(c) => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                '/' if self.cursor.peek_char(1) == '*' => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    fn skip_prologue(&mut self) {
        if self.cursor.remaining().starts_with('\u{FEFF}') {
            debug!("skipping byte-order mark");
            self.cursor.advance();
        }

        if self.cursor.remaining().starts_with("#!") {
            let start = self.cursor.position();
            self.cursor.eat_while(|c| c != '\n');
            debug!(shebang = self.cursor.slice_from(start), "skipping shebang line");
            self.cursor.match_char('\n');
        }
    }

    /// Skips a `//` comment up to, not including, the line terminator.
    pub fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a `/* ... */` comment.
    ///
    /// Block comments do not nest: the first `*/` closes the comment. An
    /// unclosed comment runs to the end of input and is reported.
    pub fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance_n(2);

        loop {
            if self.cursor.is_at_end() {
                let span = self.span_from(start, line, column);
                self.report(
                    DiagnosticBuilder::error("unterminated block comment")
                        .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
                        .span(span)
                        .help("add `*/` to close the comment"),
                );
                return;
            }

            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                return;
            }
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use monkey_util::{DiagnosticCode, Handler};

    fn literals(source: &str) -> Vec<String> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler).map(|t| t.literal).collect()
    }

    #[test]
    fn test_line_comments() {
        let source = "=+// This is a comment\n// This is still a comment\nlet a = 1;\n// final";
        assert_eq!(literals(source), vec!["=", "+", "let", "a", "=", "1", ";"]);
    }

    #[test]
    fn test_block_comments() {
        let source = "=+/* This is a comment\n\nlet c = 2; */\nlet a = 1;\n/* two\n lines\n */";
        assert_eq!(literals(source), vec!["=", "+", "let", "a", "=", "1", ";"]);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        assert_eq!(literals("/* a /* b */ c */"), vec!["c", "*", "/"]);
    }

    #[test]
    fn test_comment_like_operators() {
        assert_eq!(literals("x */ 3;"), vec!["x", "*", "/", "3", ";"]);
        assert_eq!(literals("!-/ *5;"), vec!["!", "-", "/", "*", "5", ";"]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("1 /*\nnever closed", &mut handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Int);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        drop(lexer);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT));
        assert_eq!((diags[0].span.line, diags[0].span.column), (1, 3));
    }

    #[test]
    fn test_shebang_is_skipped() {
        assert_eq!(literals("#!/bin/monkey\n10;"), vec!["10", ";"]);
        assert!(literals("#!/usr/bin/env monkey").is_empty());
    }

    #[test]
    fn test_shebang_only_on_first_line() {
        let mut handler = Handler::new();
        let kinds: Vec<TokenKind> = Lexer::new("1\n#!x", &mut handler).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Int,
                TokenKind::Illegal,
                TokenKind::Bang,
                TokenKind::Ident
            ]
        );
    }

    #[test]
    fn test_byte_order_mark() {
        assert_eq!(literals("\u{FEFF}let"), vec!["let"]);
        assert_eq!(literals("\u{FEFF}#!/bin/monkey\nx"), vec!["x"]);
    }

    #[test]
    fn test_whitespace_kinds() {
        assert_eq!(literals(" \t\r\n1\r\n2"), vec!["1", "2"]);
    }
}
