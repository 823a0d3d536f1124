//! Check command implementation.
//!
//! Lexes each input file and reports every diagnostic with its source
//! location. Fails when any file has a lexical error.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::commands::common::{lex_files, LexedFile};
use crate::config::Config;
use crate::error::{MonkeytError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Extra namespace prefixes.
    pub namespaces: Vec<String>,
    /// Worker count override (default: from config).
    pub jobs: Option<usize>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, writing the report to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    /// Execute the command, writing the report to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let lexer_config = self.config.lexer.to_lexer_config(&self.args.namespaces);
        let jobs = self.config.effective_jobs(self.args.jobs)?;
        let files = lex_files(&self.args.files, &lexer_config, jobs)?;

        let mut failed_files = 0;
        let mut total_errors = 0;
        for file in &files {
            out.write_all(render_report(file).as_bytes())?;
            let errors = file.error_count();
            if errors > 0 {
                failed_files += 1;
                total_errors += errors;
            }
        }

        if self.args.verbose {
            info!(
                "Checked {} file(s): {} clean",
                files.len(),
                files.len() - failed_files
            );
        }

        if total_errors > 0 {
            return Err(MonkeytError::Lex {
                files: failed_files,
                errors: total_errors,
            });
        }
        Ok(())
    }
}

/// Render all diagnostics for one file followed by a summary line.
pub fn render_report(file: &LexedFile) -> String {
    let name = file.name();
    let mut report = String::new();
    for diagnostic in &file.diagnostics {
        report.push_str(&diagnostic.render(&name, &file.source));
        report.push_str("\n\n");
    }

    let errors = file.error_count();
    let warnings = file.diagnostics.len() - errors;
    if file.diagnostics.is_empty() {
        report.push_str(&format!("{}: ok\n", name));
    } else {
        report.push_str(&format!(
            "{}: {} error(s), {} warning(s)\n",
            name, errors, warnings
        ));
    }
    report
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    CheckCommand::new(args, config).run()
}
