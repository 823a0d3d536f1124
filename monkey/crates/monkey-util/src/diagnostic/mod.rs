//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The lexer never aborts on bad input; instead it keeps producing tokens
//! and records what went wrong in a [`Handler`]. Tools read the handler
//! afterwards to decide whether a source file is clean.
//!
//! # Examples
//!
//! ```
//! use monkey_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use monkey_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(8, 9, 1, 9))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that makes the source invalid
    Error,
    /// Suspicious input that still lexes
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic against the source it was reported for
    ///
    /// The output has a header line, a `--> name:line:col` location line,
    /// the offending source line with carets, then any notes and helps.
    /// If the span cannot be resolved against `source` the snippet is
    /// omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use monkey_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use monkey_util::Span;
    ///
    /// let diag = Diagnostic::error("unexpected character '@'", Span::new(8, 9, 1, 9))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    /// let text = diag.render("main.mon", "let a = @;");
    /// assert!(text.starts_with("error[E1001]: unexpected character '@'"));
    /// assert!(text.contains("--> main.mon:1:9"));
    /// ```
    pub fn render(&self, name: &str, source: &str) -> String {
        let mut out = format!("{}\n  --> {}:{}:{}", self, name, self.span.line, self.span.column);

        if let Ok(line) = self.span.line_text(source) {
            let width = self
                .span
                .snippet(source)
                .map(|text| text.chars().count())
                .unwrap_or(1);
            let start = self.span.column as usize;
            let snippet = SourceSnippet::new(
                line,
                self.span.line as usize,
                start,
                start + width,
                None::<String>,
            );
            out.push('\n');
            out.push_str(&snippet.format());
        }

        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// # Examples
///
/// ```
/// use monkey_util::diagnostic::{Diagnostic, Handler};
/// use monkey_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("odd escape", Span::DUMMY));
///
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a copy of all diagnostics, in report order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler, returning its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
