//! Core error types for monkey-util crate

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// The span does not fall inside the source text it was resolved against
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the source text in bytes
        source_len: usize,
        /// Span start offset
        span_start: usize,
        /// Span end offset
        span_end: usize,
    },

    /// The span names a line the source text does not have
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested 1-based line
        line: usize,
        /// Number of lines in the source
        max_lines: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
