//! Configuration module for the monkeyt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the monkeyt application.

use dirs::{config_dir, home_dir};
use monkey_lex::{LexerConfig, DEFAULT_NAMESPACES};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{MonkeytError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "monkeyt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Number of files lexed in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerSettings,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Lexer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSettings {
    /// Identifiers that join with a following `.member` into one name.
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputSettings {
    /// Default format for `monkeyt tokens`.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

fn default_namespaces() -> Vec<String> {
    DEFAULT_NAMESPACES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            jobs: default_parallel_jobs(),
            lexer: LexerSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Default for LexerSettings {
    fn default() -> Self {
        Self {
            namespaces: default_namespaces(),
        }
    }
}

impl LexerSettings {
    /// Builds the lexer configuration, adding `extra` namespaces given on
    /// the command line.
    pub fn to_lexer_config(&self, extra: &[String]) -> LexerConfig {
        LexerConfig::with_namespaces(self.namespaces.iter().chain(extra).cloned())
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/monkeyt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MonkeytError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            MonkeytError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            MonkeytError::Config(format!("Failed to serialize configuration: {}", e))
        })
    }

    /// Resolve the worker count, preferring a command-line override.
    pub fn effective_jobs(&self, cli_jobs: Option<usize>) -> Result<usize> {
        let jobs = cli_jobs.unwrap_or(self.jobs);
        if jobs == 0 {
            return Err(MonkeytError::Validation(
                "jobs must be at least 1".to_string(),
            ));
        }
        Ok(jobs)
    }

    fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(MonkeytError::Config(
                "jobs must be at least 1".to_string(),
            ));
        }
        if let Some(bad) = self
            .lexer
            .namespaces
            .iter()
            .find(|ns| !is_identifier(ns))
        {
            return Err(MonkeytError::Config(format!(
                "invalid namespace '{}': must be an identifier",
                bad
            )));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("monkeyt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("monkeyt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

/// Returns true if `name` is a plain identifier the lexer can join on.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(monkey_lex::unicode::is_ident_start)
        && chars.all(monkey_lex::unicode::is_ident_continue)
}
