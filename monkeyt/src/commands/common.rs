//! Common types and utilities for monkeyt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::{Path, PathBuf};

use monkey_lex::{tokenize, LexerConfig, Token};
use monkey_util::{Diagnostic, Handler};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MonkeytError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `LINE:COL KIND "literal"` line per token
    #[default]
    Text,
    /// One JSON array of token objects per file
    Json,
}

// ============================================================================
// Lexing
// ============================================================================

/// A source file together with everything the lexer produced for it.
#[derive(Debug)]
pub struct LexedFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Full source text.
    pub source: String,
    /// Token stream, ending with `Eof`.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order the lexer reported them.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexedFile {
    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_error()).count()
    }

    /// Display name used in headers and diagnostic locations.
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read and lex a single file.
pub fn lex_file(path: &Path, config: &LexerConfig) -> Result<LexedFile> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        MonkeytError::FileOperation(format!(
            "{}: {}",
            error_messages::CANNOT_READ.replace("{}", &path.display().to_string()),
            e
        ))
    })?;

    let mut handler = Handler::new();
    let tokens = tokenize(&source, config.clone(), &mut handler);
    debug!("Lexed {} into {} token(s)", path.display(), tokens.len());

    Ok(LexedFile {
        path: path.to_path_buf(),
        source,
        tokens,
        diagnostics: handler.into_diagnostics(),
    })
}

/// Lex every file on a pool of `jobs` workers.
///
/// Results come back in input order.
pub fn lex_files(paths: &[PathBuf], config: &LexerConfig, jobs: usize) -> Result<Vec<LexedFile>> {
    if paths.is_empty() {
        return Err(MonkeytError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| MonkeytError::Validation(format!("Failed to start workers: {}", e)))?;

    debug!("Lexing {} file(s) with {} job(s)", paths.len(), jobs);
    pool.install(|| paths.par_iter().map(|path| lex_file(path, config)).collect())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when a source file cannot be read.
    pub const CANNOT_READ: &str = "Cannot read {}";

    /// Error when the configuration file already exists.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists: {} (use --force to overwrite)";
}
