//! Character classification for the Monkey lexer.
//!
//! Identifiers accept Unicode letters and digits, so `世界` is a valid
//! name, while numeric literals and whitespace stay ASCII-only.

/// Checks if a character can start an identifier.
///
/// ASCII letters, `_`, and any Unicode alphabetic character qualify.
///
/// # Example
///
/// ```
/// use monkey_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('世'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('£'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use monkey_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('界'));
/// assert!(!is_ident_continue('?'));
/// assert!(!is_ident_continue('.'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character may end an identifier as a predicate or
/// mutator marker (`empty?`, `sort!`).
pub fn is_ident_suffix(c: char) -> bool {
    matches!(c, '?' | '!')
}

/// Checks if a character is whitespace between tokens.
///
/// Only space, tab, carriage return and line feed are skipped; other
/// Unicode spacing is reported as an illegal character.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// # Example
///
/// ```
/// use monkey_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('9', 10));
/// assert!(is_digit_in_base('F', 16));
/// assert!(!is_digit_in_base('2', 2));
/// assert!(!is_digit_in_base('7', 8));
/// ```
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}
