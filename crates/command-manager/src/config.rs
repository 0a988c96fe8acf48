//! Configuration for the console front end.

use crate::error::{ConsoleError, ConsoleResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default log level. Kept quiet so logs don't interleave with output.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Default line that ends the interactive session.
pub const DEFAULT_EXIT_KEYWORD: &str = "EXIT";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "COMMAND_MANAGER_LOG_LEVEL";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Run the example messages before reading input.
    pub run_demo: bool,
    /// Input line that ends the session.
    pub exit_keyword: String,
    /// Optional JSONL log file.
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            run_demo: true,
            exit_keyword: DEFAULT_EXIT_KEYWORD.to_string(),
            log_path: None,
        }
    }
}

impl Config {
    /// Load from `path` if given, else defaults, then apply env overrides.
    pub fn load(path: Option<&Path>) -> ConsoleResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.load_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> ConsoleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    fn load_from_env(&mut self) {
        if let Ok(log_level) = std::env::var(LOG_LEVEL_ENV) {
            if !log_level.trim().is_empty() {
                self.log_level = log_level.trim().to_string();
            }
        }
    }

    fn validate(&self) -> ConsoleResult<()> {
        if self.exit_keyword.is_empty() {
            return Err(ConsoleError::Config(
                "exit_keyword must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
