//! Command modules for the monkeyt CLI.
//!
//! Each subcommand lives in its own file with an `Args` struct, a
//! command handler and a `run_*` entry point.

pub mod common;

pub mod check;
pub mod config;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use config::{run_config, ConfigArgs};
pub use tokens::{run_tokens, TokensArgs};
