//! monkey-util - Shared foundation types for the Monkey front end
//!
//! This crate holds the small set of types every other Monkey crate leans
//! on: source spans for locating tokens, and the diagnostic machinery the
//! lexer uses to report problems without interrupting the token stream.
//!
//! # Example
//!
//! ```
//! use monkey_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
