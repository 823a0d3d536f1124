//! Tokens command implementation.
//!
//! Dumps the token stream of each input file, as text or as JSON.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::commands::common::{lex_files, LexedFile, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Output format override (default: from config).
    pub format: Option<OutputFormat>,
    /// Extra namespace prefixes.
    pub namespaces: Vec<String>,
    /// Worker count override (default: from config).
    pub jobs: Option<usize>,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    literal: &'a str,
    line: u32,
    column: u32,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, writing to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    /// Execute the command, writing to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let lexer_config = self.config.lexer.to_lexer_config(&self.args.namespaces);
        let jobs = self.config.effective_jobs(self.args.jobs)?;
        let files = lex_files(&self.args.files, &lexer_config, jobs)?;

        let format = self.args.format.unwrap_or(self.config.output.format);
        let show_headers = files.len() > 1;
        for file in &files {
            match format {
                OutputFormat::Text => {
                    if show_headers {
                        writeln!(out, "==> {} <==", file.name())?;
                    }
                    out.write_all(render_text(file).as_bytes())?;
                }
                OutputFormat::Json => writeln!(out, "{}", render_json(file)?)?,
            }
        }

        if self.args.verbose {
            let total: usize = files.iter().map(|f| f.tokens.len()).sum();
            info!("Dumped {} token(s) from {} file(s)", total, files.len());
        }
        Ok(())
    }
}

/// Render one `LINE:COL KIND "literal"` line per token.
pub fn render_text(file: &LexedFile) -> String {
    let mut text = String::new();
    for token in &file.tokens {
        text.push_str(&format!(
            "{}:{} {} {:?}\n",
            token.span.line,
            token.span.column,
            token.kind.as_str(),
            token.literal
        ));
    }
    text
}

/// Render the token stream as a compact JSON array.
pub fn render_json(file: &LexedFile) -> Result<String> {
    let records: Vec<TokenRecord<'_>> = file
        .tokens
        .iter()
        .map(|token| TokenRecord {
            kind: token.kind.as_str(),
            literal: &token.literal,
            line: token.span.line,
            column: token.span.column,
        })
        .collect();
    Ok(serde_json::to_string(&records)?)
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    TokensCommand::new(args, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn dump(args: TokensArgs) -> String {
        let mut out = Vec::new();
        TokensCommand::new(args, Config::default())
            .write_to(&mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let dir = TempDir::new().unwrap();
        let path = source_file(&dir, "a.mon", "let x = 5;\nputs(\"hi\");");

        let output = dump(TokensArgs {
            files: vec![path],
            ..Default::default()
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "1:1 LET \"let\"");
        assert_eq!(lines[3], "1:9 INT \"5\"");
        assert_eq!(lines[7], "2:6 STRING \"hi\"");
        assert_eq!(lines.last().copied(), Some("2:12 EOF \"\""));
    }

    #[test]
    fn test_json_output() {
        let dir = TempDir::new().unwrap();
        let path = source_file(&dir, "a.mon", "math.sqrt(2)");

        let output = dump(TokensArgs {
            files: vec![path],
            format: Some(OutputFormat::Json),
            ..Default::default()
        });
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        let tokens = value.as_array().unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0]["kind"], "IDENT");
        assert_eq!(tokens[0]["literal"], "math.sqrt");
        assert_eq!(tokens[2]["column"], 11);
        assert_eq!(tokens[4]["kind"], "EOF");
    }

    #[test]
    fn test_headers_for_several_files() {
        let dir = TempDir::new().unwrap();
        let a = source_file(&dir, "a.mon", "1");
        let b = source_file(&dir, "b.mon", "2");

        let output = dump(TokensArgs {
            files: vec![a.clone(), b.clone()],
            ..Default::default()
        });
        let a_header = format!("==> {} <==", a.display());
        let b_header = format!("==> {} <==", b.display());
        assert!(output.starts_with(&a_header));
        assert!(output.find(&a_header).unwrap() < output.find(&b_header).unwrap());
    }

    #[test]
    fn test_extra_namespace() {
        let dir = TempDir::new().unwrap();
        let path = source_file(&dir, "a.mon", "net.get");

        let output = dump(TokensArgs {
            files: vec![path],
            namespaces: vec!["net".to_string()],
            ..Default::default()
        });
        assert!(output.starts_with("1:1 IDENT \"net.get\"\n"));
    }
}
