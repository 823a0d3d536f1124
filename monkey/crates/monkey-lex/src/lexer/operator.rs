//! Operator lexing.
//!
//! Every operator is one character, optionally extended by one character
//! of lookahead. Nothing longer than two characters exists.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes the current character, then `next` if it follows.
    ///
    /// Returns `compound` when the second character was taken.
    fn lex_pair(&mut self, next: char, compound: TokenKind, single: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char(next) {
            compound
        } else {
            single
        };
        self.lexeme_token(kind)
    }

    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> Token {
        self.lex_pair('=', TokenKind::Eq, TokenKind::Assign)
    }

    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> Token {
        self.lex_pair('=', TokenKind::NotEq, TokenKind::Bang)
    }

    /// Handles: `<`, `<=`
    pub fn lex_less(&mut self) -> Token {
        self.lex_pair('=', TokenKind::LtEquals, TokenKind::Lt)
    }

    /// Handles: `>`, `>=`
    pub fn lex_greater(&mut self) -> Token {
        self.lex_pair('=', TokenKind::GtEquals, TokenKind::Gt)
    }

    /// Handles: `/`, `/=`
    ///
    /// Comment openers never reach here; they are skipped as trivia.
    pub fn lex_slash(&mut self) -> Token {
        self.lex_pair('=', TokenKind::SlashEquals, TokenKind::Slash)
    }

    /// Handles: `+`, `++`, `+=`
    pub fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('+') {
            TokenKind::PlusPlus
        } else if self.cursor.match_char('=') {
            TokenKind::PlusEquals
        } else {
            TokenKind::Plus
        };
        self.lexeme_token(kind)
    }

    /// Handles: `-`, `--`, `-=`
    pub fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('-') {
            TokenKind::MinusMinus
        } else if self.cursor.match_char('=') {
            TokenKind::MinusEquals
        } else {
            TokenKind::Minus
        };
        self.lexeme_token(kind)
    }

    /// Handles: `*`, `**`, `*=`
    pub fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('*') {
            TokenKind::Pow
        } else if self.cursor.match_char('=') {
            TokenKind::AsteriskEquals
        } else {
            TokenKind::Asterisk
        };
        self.lexeme_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use monkey_util::Handler;

    fn pairs(source: &str) -> Vec<(TokenKind, String)> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler)
            .map(|t| (t.kind, t.literal))
            .collect()
    }

    #[test]
    fn test_single_operators() {
        let kinds: Vec<TokenKind> = pairs("= + - * / ! < >").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Bang,
                TokenKind::Lt,
                TokenKind::Gt,
            ]
        );
    }

    #[test]
    fn test_compound_operators() {
        let source = "== != <= >= += -= *= /= ** ++ --";
        let expected = [
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::LtEquals,
            TokenKind::GtEquals,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::AsteriskEquals,
            TokenKind::SlashEquals,
            TokenKind::Pow,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
        ];
        let tokens = pairs(source);
        assert_eq!(tokens.len(), expected.len());
        for ((kind, literal), (want, text)) in tokens.iter().zip(expected.iter().zip(source.split(' '))) {
            assert_eq!(kind, want);
            assert_eq!(literal, text);
        }
    }

    #[test]
    fn test_longest_operator_is_two_characters() {
        let literals: Vec<String> = pairs("===***+++").into_iter().map(|(_, l)| l).collect();
        assert_eq!(literals, vec!["==", "=", "**", "*", "++", "+"]);
    }

    #[test]
    fn test_operators_in_expressions() {
        let literals: Vec<String> = pairs("a++;b--;b**b;x+=1").into_iter().map(|(_, l)| l).collect();
        assert_eq!(
            literals,
            vec!["a", "++", ";", "b", "--", ";", "b", "**", "b", ";", "x", "+=", "1"]
        );
    }
}
