//! Config command implementation.
//!
//! Prints the effective configuration, or writes a default
//! `monkeyt.toml` with `--init`.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::commands::common::error_messages;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{MonkeytError, Result};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Write a default configuration file.
    pub init: bool,
    /// Where to write the file (default: `./monkeyt.toml`).
    pub path: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// Config command handler.
pub struct ConfigCommand {
    args: ConfigArgs,
    config: Config,
}

impl ConfigCommand {
    /// Create a new ConfigCommand.
    pub fn new(args: ConfigArgs, config: Config) -> Self {
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
        if self.args.init {
            return self.init_config(out);
        }
        out.write_all(self.config.to_toml()?.as_bytes())?;
        Ok(())
    }

    fn target_path(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    fn init_config(&self, out: &mut impl Write) -> Result<()> {
        let path = self.target_path();
        if path.exists() && !self.args.force {
            return Err(MonkeytError::Validation(
                error_messages::CONFIG_EXISTS.replace("{}", &path.display().to_string()),
            ));
        }

        Config::default().save_to_path(&path)?;
        if self.args.verbose {
            info!("Wrote default configuration");
        }
        writeln!(out, "Created {}", path.display())?;
        Ok(())
    }
}

/// Run the config command.
pub fn run_config(args: ConfigArgs, config: Config) -> Result<()> {
    ConfigCommand::new(args, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn execute(args: ConfigArgs, config: Config) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = ConfigCommand::new(args, config).write_to(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_effective_config() {
        let mut config = Config::default();
        config.jobs = 3;

        let (result, output) = execute(ConfigArgs::default(), config.clone());
        assert!(result.is_ok());
        assert!(output.contains("jobs = 3"));
        assert!(output.contains("[lexer]"));
        let parsed: Config = toml::from_str(&output).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_init_writes_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monkeyt.toml");

        let (result, output) = execute(
            ConfigArgs {
                init: true,
                path: Some(path.clone()),
                ..Default::default()
            },
            Config::default(),
        );
        assert!(result.is_ok());
        assert!(output.starts_with("Created "));
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monkeyt.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        let args = ConfigArgs {
            init: true,
            path: Some(path.clone()),
            ..Default::default()
        };
        let (result, _) = execute(args.clone(), Config::default());
        assert!(matches!(result, Err(MonkeytError::Validation(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "verbose = true\n");

        let (result, _) = execute(
            ConfigArgs {
                force: true,
                ..args
            },
            Config::default(),
        );
        assert!(result.is_ok());
        assert!(!Config::load_from_path(&path).unwrap().verbose);
    }
}
