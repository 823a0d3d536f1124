//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. All lookahead is counted
//! in characters, so multi-byte UTF-8 sequences are never split, and the
//! cursor tracks line/column information for spans and diagnostics.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use monkey_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42;");
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns `'\0'` at the end of the source. A literal NUL inside the
    /// source is indistinguishable here, so callers that care use
    /// [`Cursor::is_at_end`].
    #[inline]
    pub fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("£ab");
    /// assert_eq!(cursor.peek_char(0), '£');
    /// assert_eq!(cursor.peek_char(1), 'a');
    /// assert_eq!(cursor.peek_char(2), 'b');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();
        // ASCII-only prefix can be indexed directly.
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }
        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character, updating line and column.
    ///
    /// Does nothing at the end of the source.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances by up to `count` characters.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abcdef");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), 'd');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.remaining(), "abc");
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut eaten = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            eaten += 1;
        }
        eaten
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the expected character if it is next.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based, in characters).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from byte `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("世界 x");
    /// let start = cursor.position();
    /// cursor.advance_n(2);
    /// assert_eq!(cursor.slice_from(start), "世界");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the number of characters left to scan.
    pub fn remaining_chars(&self) -> usize {
        self.remaining().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 42;");
        assert_eq!(cursor.current_char(), 'l');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());

        cursor.advance();
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_peek_counts_characters_not_bytes() {
        let cursor = Cursor::new("3.113£;");
        assert_eq!(cursor.peek_char(5), '£');
        assert_eq!(cursor.peek_char(6), ';');
        assert_eq!(cursor.peek_char(7), '\0');

        let cursor = Cursor::new("世界");
        assert_eq!(cursor.peek_char(1), '界');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("=>");
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char('>'));
        assert!(!cursor.match_char('>'));
    }

    #[test]
    fn test_match_nul_at_end_is_false() {
        let mut cursor = Cursor::new("");
        assert!(!cursor.match_char('\0'));
    }

    #[test]
    fn test_eat_while_stops_at_end() {
        let mut cursor = Cursor::new("aaaa");
        assert_eq!(cursor.eat_while(|c| c == 'a'), 4);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("line1\nline2\nline3");
        cursor.advance_n(5);
        assert_eq!(cursor.column(), 6);

        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);

        cursor.advance_n(6);
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("let x = 42;");
        let start = cursor.position();
        cursor.advance_n(3);
        assert_eq!(cursor.slice_from(start), "let");
        assert_eq!(cursor.remaining(), " x = 42;");
        assert_eq!(cursor.remaining_chars(), 8);
    }
}
