//! monkeyt - Token dumper and lexical checker for Monkey scripts.
//!
//! This is the main entry point for the monkeyt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    run_check, run_config, run_tokens, CheckArgs, ConfigArgs, TokensArgs,
};
use config::Config;
use error::{MonkeytError, Result};

/// monkeyt - Inspect how Monkey source files are tokenized
///
/// monkeyt dumps token streams, reports lexical problems with their
/// source locations, and manages its own configuration file.
#[derive(Parser, Debug)]
#[command(name = "monkeyt")]
#[command(author = "Monkey Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token dumper and lexical checker for Monkey scripts", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MONKEYT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MONKEYT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MONKEYT_NO_COLOR")]
    no_color: bool,

    /// Number of files lexed in parallel (default: from config)
    #[arg(short, long, global = true)]
    jobs: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the monkeyt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    ///
    /// Every token is printed with its line, column, kind and literal,
    /// including the final EOF token.
    Tokens(TokensCommand),

    /// Report lexical errors and warnings
    ///
    /// Exits with a non-zero status when any file has an error.
    Check(CheckCommand),

    /// Show or create the configuration file
    Config(ConfigCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Additional namespace prefix (repeatable)
    #[arg(short, long = "namespace", value_name = "NAME")]
    namespaces: Vec<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Additional namespace prefix (repeatable)
    #[arg(short, long = "namespace", value_name = "NAME")]
    namespaces: Vec<String>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write a default configuration file
    #[arg(long)]
    init: bool,

    /// Where to write the configuration file (default: ./monkeyt.toml)
    #[arg(short, long, requires = "init")]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long, requires = "init")]
    force: bool,
}

/// Main entry point for the monkeyt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    let verbose = cli.verbose || config.verbose;
    execute_command(cli.command, verbose, cli.jobs, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MonkeytError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(
    command: Commands,
    verbose: bool,
    jobs: Option<usize>,
    config: Config,
) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, jobs, config),
        Commands::Check(args) => execute_check(args, verbose, jobs, config),
        Commands::Config(args) => execute_config(args, verbose, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(
    args: TokensCommand,
    verbose: bool,
    jobs: Option<usize>,
    config: Config,
) -> Result<()> {
    let tokens_args = TokensArgs {
        verbose,
        files: args.files,
        format: args.format,
        namespaces: args.namespaces,
        jobs,
    };
    run_tokens(tokens_args, config)
}

/// Execute the check command.
fn execute_check(
    args: CheckCommand,
    verbose: bool,
    jobs: Option<usize>,
    config: Config,
) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        files: args.files,
        namespaces: args.namespaces,
        jobs,
    };
    run_check(check_args, config)
}

/// Execute the config command.
fn execute_config(args: ConfigCommand, verbose: bool, config: Config) -> Result<()> {
    let config_args = ConfigArgs {
        verbose,
        init: args.init,
        path: args.path,
        force: args.force,
    };
    run_config(config_args, config)
}
