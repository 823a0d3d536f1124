//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Whitespace, comment, byte-order mark and shebang skipping
//! - `identifier` - Identifier, keyword and namespace lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `command` - Backtick command lexing
//! - `operator` - Operator lexing

mod command;
mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;

use monkey_util::Handler;

use crate::config::LexerConfig;
use crate::token::Token;

/// Lexes a whole source text, returning every token including the final
/// `Eof`.
///
/// # Example
///
/// ```
/// use monkey_lex::{tokenize, LexerConfig, TokenKind};
/// use monkey_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = tokenize("math.sqrt(4)", LexerConfig::default(), &mut handler);
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0].literal, "math.sqrt");
/// assert_eq!(tokens[4].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str, config: LexerConfig, handler: &mut Handler) -> Vec<Token> {
    let mut lexer = Lexer::with_config(source, config, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
