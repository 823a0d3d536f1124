//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range with the human-readable line and column
//! where the range starts. The lexer stamps one on every token; diagnostics
//! carry one so tools can point back into the source.
//!
//! # Examples
//!
//! ```
//! use monkey_util::span::Span;
//!
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.len(), 3);
//! ```

use crate::error::{DiagnosticError, DiagnosticResult};

/// Source location span
///
/// `start`/`end` are byte offsets into the source text, `line` and
/// `column` are 1-based and describe the position of `start`. Columns are
/// counted in characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing and for synthesized tokens
    ///
    /// # Examples
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// let point = Span::point(12, 2, 3);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the byte offset falls inside the span
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// Line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// let a = Span::new(10, 20, 1, 11);
    /// let b = Span::new(25, 35, 2, 3);
    /// let merged = a.merge(b);
    /// assert_eq!((merged.start, merged.end), (10, 35));
    /// assert_eq!((merged.line, merged.column), (1, 11));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Returns the source text the span covers
    ///
    /// # Errors
    ///
    /// [`DiagnosticError::SpanOutOfBounds`] if the span does not lie on
    /// character boundaries inside `source`.
    pub fn snippet<'s>(&self, source: &'s str) -> DiagnosticResult<&'s str> {
        source
            .get(self.start..self.end)
            .ok_or(DiagnosticError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            })
    }

    /// Returns the full text of the line the span starts on, without the
    /// line terminator
    ///
    /// # Errors
    ///
    /// [`DiagnosticError::InvalidLineNumber`] if the span's line is zero or
    /// past the end of `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// let source = "let a = 1;\nlet b = @;";
    /// let span = Span::new(19, 20, 2, 9);
    /// assert_eq!(span.line_text(source).unwrap(), "let b = @;");
    /// ```
    pub fn line_text<'s>(&self, source: &'s str) -> DiagnosticResult<&'s str> {
        let max_lines = source.lines().count().max(1);
        let index = (self.line as usize).checked_sub(1);
        index
            .and_then(|i| source.lines().nth(i).or(if i == 0 { Some("") } else { None }))
            .map(|line| line.trim_end_matches('\r'))
            .ok_or(DiagnosticError::InvalidLineNumber {
                line: self.line as usize,
                max_lines,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_span_point_is_empty() {
        let span = Span::point(3, 1, 4);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(10, 20, 1, 1);
        assert!(span.contains(10));
        assert!(span.contains(19));
        assert!(!span.contains(20));
        assert!(!span.contains(9));
    }

    #[test]
    fn test_span_merge_order_independent() {
        let a = Span::new(25, 35, 2, 3);
        let b = Span::new(10, 20, 1, 11);
        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(a.merge(b).line, 1);
    }

    #[test]
    fn test_snippet() {
        let source = "let x = 42;";
        let span = Span::new(4, 5, 1, 5);
        assert_eq!(span.snippet(source), Ok("x"));
    }

    #[test]
    fn test_snippet_out_of_bounds() {
        let span = Span::new(4, 50, 1, 5);
        assert!(matches!(
            span.snippet("abc"),
            Err(DiagnosticError::SpanOutOfBounds { source_len: 3, .. })
        ));
    }

    #[test]
    fn test_snippet_not_on_char_boundary() {
        let span = Span::new(1, 2, 1, 2);
        assert!(span.snippet("世界").is_err());
    }

    #[test]
    fn test_line_text() {
        let source = "first\r\nsecond\nthird";
        assert_eq!(Span::new(0, 1, 1, 1).line_text(source), Ok("first"));
        assert_eq!(Span::new(7, 8, 2, 1).line_text(source), Ok("second"));
        assert_eq!(Span::new(14, 15, 3, 1).line_text(source), Ok("third"));
    }

    #[test]
    fn test_line_text_empty_source() {
        assert_eq!(Span::point(0, 1, 1).line_text(""), Ok(""));
    }

    #[test]
    fn test_line_text_invalid() {
        assert!(Span::DUMMY.line_text("abc").is_err());
        assert!(matches!(
            Span::new(0, 0, 7, 1).line_text("a\nb"),
            Err(DiagnosticError::InvalidLineNumber { line: 7, max_lines: 2 })
        ));
    }
}
