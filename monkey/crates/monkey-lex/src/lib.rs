//! monkey-lex - Lexical Analyzer for the Monkey scripting language
//!
//! This crate turns Monkey source text into a stream of tokens for the
//! parser. The lexer is pull-based, never fails, and always reaches
//! [`TokenKind::Eof`]: malformed input becomes [`TokenKind::Illegal`]
//! tokens plus diagnostics in a [`monkey_util::Handler`].
//!
//! # Example Usage
//!
//! ```
//! use monkey_util::Handler;
//! use monkey_lex::{Lexer, TokenKind};
//!
//! let source = "let x = math.sqrt(16);";
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(source, &mut handler);
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//!
//! // The rest via the iterator, which stops before Eof
//! let literals: Vec<String> = lexer.map(|t| t.literal).collect();
//! assert_eq!(literals, ["x", "=", "math.sqrt", "(", "16", ")", ";"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`config`] - Namespace prefix configuration
//! - [`unicode`] - Character classification
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`, `for`
//!
//! ## Identifiers
//!
//! A Unicode letter or `_`, then letters, digits or `_`, with an optional
//! trailing `?` or `!`. Configured namespace prefixes join with a following
//! member (`string.toupper`) into one identifier.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0xFF`, `0b1010` (spelling kept verbatim)
//! - **Float**: `3.14`
//! - **String**: `"hello\n"` (escapes decoded)
//! - **Command**: `` `ls -l` `` (kept verbatim)
//!
//! ## Operators
//!
//! `=` `+` `-` `*` `/` `%` `!` `<` `>` `==` `!=` `<=` `>=` `+=` `-=` `*=`
//! `/=` `**` `++` `--`
//!
//! ## Delimiters
//!
//! `(` `)` `{` `}` `[` `]` `,` `;` `:` `.`
//!
//! ## Trivia
//!
//! Whitespace, `//` and `/* */` comments, and a leading `#!` line are
//! skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use config::{LexerConfig, DEFAULT_NAMESPACES};
pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use token::{keyword_from_ident, lookup_ident, Token, TokenKind};
