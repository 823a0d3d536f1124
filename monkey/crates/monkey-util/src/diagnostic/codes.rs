//! Diagnostic codes for categorizing lexical errors and warnings.
//!
//! # Examples
//!
//! ```
//! use monkey_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`: the prefix is `"E"` for
/// errors or `"W"` for warnings and the number is zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERRORS (E1xxx)
    // =========================================================================

    /// E1001: Character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: String literal reaches end of input without a closing quote
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Base prefix with no digits after it
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1005: Block comment reaches end of input without `*/`
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);
    /// E1006: Backtick command reaches end of input without a closing backtick
    pub const E_LEXER_UNTERMINATED_COMMAND: Self = Self::new("E", 1006);

    // =========================================================================
    // LEXER WARNINGS (W1xxx)
    // =========================================================================

    /// W1001: Escape sequence the language does not define
    pub const W_LEXER_UNKNOWN_ESCAPE: Self = Self::new("W", 1001);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
