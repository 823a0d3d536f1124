//! Edge case tests for monkey-lex

use crate::{tokenize, Lexer, LexerConfig, Token, TokenKind};
use monkey_util::Handler;

fn lex_all(source: &str) -> Vec<Token> {
    let mut handler = Handler::new();
    Lexer::new(source, &mut handler).collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).into_iter().map(|t| t.kind).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_whitespace_only() {
    assert!(lex_all("   \n\t  \r\n  ").is_empty());
}

#[test]
fn test_edge_comments_only() {
    assert!(lex_all("// comment\n/* block */\n// another").is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    let t = lex_all("x");
    assert_eq!(t[0].kind, TokenKind::Ident);
    assert_eq!(t[0].literal, "x");
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("let {} = 1;", name));
    assert_eq!(t[1].literal, name);
}

#[test]
fn test_edge_case_sensitivity() {
    assert_eq!(kinds("Fn fn LET"), vec![TokenKind::Ident, TokenKind::Function, TokenKind::Ident]);
}

#[test]
fn test_edge_nested_delimiters() {
    let t = kinds("((()))");
    assert_eq!(t.iter().filter(|k| **k == TokenKind::LParen).count(), 3);
}

#[test]
fn test_edge_leading_zeros() {
    assert_eq!(lex_all("007")[0].literal, "007");
}

#[test]
fn test_edge_huge_integer_is_not_evaluated() {
    let digits = "9".repeat(64);
    let t = lex_all(&digits);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].literal, digits);
}

#[test]
fn test_edge_lone_dot_before_digit() {
    assert_eq!(kinds(".5"), vec![TokenKind::Period, TokenKind::Int]);
}

#[test]
fn test_edge_dot_semicolon() {
    assert_eq!(kinds(".;"), vec![TokenKind::Period, TokenKind::Semicolon]);
}

#[test]
fn test_edge_negative_number_is_two_tokens() {
    assert_eq!(kinds("-5"), vec![TokenKind::Minus, TokenKind::Int]);
}

#[test]
fn test_edge_unicode_whitespace_is_illegal() {
    let t = lex_all("a\u{00A0}b");
    assert_eq!(t[1].kind, TokenKind::Illegal);
    assert_eq!(t[1].literal, "\u{00A0}");
}

#[test]
fn test_edge_nul_character_is_illegal() {
    let t = lex_all("a\0b");
    assert_eq!(kinds("a\0b"), vec![TokenKind::Ident, TokenKind::Illegal, TokenKind::Ident]);
    assert_eq!(t[1].literal, "\0");
}

#[test]
fn test_edge_crlf_line_endings() {
    let t = lex_all("let a = 1;\r\nlet b = 2;\r\n");
    assert_eq!(t.len(), 10);
    assert_eq!(t[5].span.line, 2);
    assert_eq!(t[5].span.column, 1);
}

#[test]
fn test_edge_shebang_without_newline() {
    assert!(lex_all("#!").is_empty());
}

#[test]
fn test_edge_comment_at_eof_without_newline() {
    assert_eq!(kinds("1 // done"), vec![TokenKind::Int]);
}

#[test]
fn test_edge_slash_at_eof() {
    assert_eq!(kinds("/"), vec![TokenKind::Slash]);
}

#[test]
fn test_edge_keyword_with_suffix() {
    let t = lex_all("if? return!");
    assert_eq!(t[0].kind, TokenKind::Ident);
    assert_eq!(t[0].literal, "if?");
    assert_eq!(t[1].literal, "return!");
}

#[test]
fn test_edge_namespace_with_empty_config() {
    let mut handler = Handler::new();
    let tokens = tokenize("os.getenv", LexerConfig::empty(), &mut handler);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::Period, TokenKind::Ident, TokenKind::Eof]
    );
}

// ==================== ERROR CASES ====================

#[test]
fn test_err_invalid_hex() {
    let mut h = Handler::new();
    let t = Lexer::new("0x", &mut h).next_token();
    assert_eq!(t.kind, TokenKind::Int);
    assert!(h.has_errors());
}

#[test]
fn test_err_invalid_binary() {
    let mut h = Handler::new();
    let t = Lexer::new("0b2", &mut h).next_token();
    assert_eq!(t.literal, "0b");
    assert!(h.has_errors());
}

#[test]
fn test_err_unterminated_string() {
    let mut h = Handler::new();
    let t = Lexer::new("\"unterminated", &mut h).next_token();
    assert_eq!(t.literal, "unterminated");
    assert!(h.has_errors());
}

#[test]
fn test_err_invalid_chars() {
    let mut h = Handler::new();
    let illegal: Vec<String> = Lexer::new("@#$&|~^'?", &mut h)
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(|t| t.literal)
        .collect();
    assert_eq!(illegal, vec!["@", "#", "$", "&", "|", "~", "^", "'", "?"]);
    assert_eq!(h.error_count(), 9);
}

#[test]
fn test_err_mixed_valid_invalid() {
    let mut h = Handler::new();
    let t: Vec<Token> = Lexer::new("let x = # 1;", &mut h).collect();
    assert_eq!(t[3].kind, TokenKind::Illegal);
    assert_eq!(t[4].literal, "1");
    assert_eq!(h.error_count(), 1);
}

#[test]
fn test_err_unterminated_comment_progress() {
    let source = "let a = 1; /* never closed\nlet b = 2;";
    let mut h = Handler::new();
    let mut lexer = Lexer::new(source, &mut h);
    let mut calls = 0;
    while !lexer.next_token().is_eof() {
        calls += 1;
        assert!(calls <= source.len(), "lexer did not terminate");
    }
    assert_eq!(calls, 5);
}

#[test]
fn test_err_diagnostics_are_ordered() {
    let mut h = Handler::new();
    let _ = tokenize("@ \"a\\q\" `x", LexerConfig::default(), &mut h);
    let codes: Vec<String> = h
        .diagnostics()
        .iter()
        .filter_map(|d| d.code.map(|c| c.as_str()))
        .collect();
    assert_eq!(codes, vec!["E1001", "W1001", "E1006"]);
}
