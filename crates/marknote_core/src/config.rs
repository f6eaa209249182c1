//! Runtime configuration for notebook front ends.
//!
//! # Responsibility
//! - Resolve database path and logging settings from defaults and env.
//! - Let callers apply explicit overrides (CLI flags) on top.
//!
//! # Invariants
//! - Empty or whitespace-only environment values are ignored.
//! - `log_level` is always one of `trace|debug|info|warn|error`.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "MARKNOTE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "MARKNOTE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "MARKNOTE_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "marknote.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(err) => Some(err),
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::InvalidLogLevel(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl NotebookConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration using `lookup` for variable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = non_empty(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = non_empty(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(&level)?;
        }
        if let Some(dir) = non_empty(LOG_DIR_ENV) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }

    /// Applies explicit overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        db_path: Option<PathBuf>,
        log_level: Option<&str>,
        log_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = db_path {
            self.db_path = path;
        }
        if let Some(level) = log_level {
            self.log_level = normalize_level(level)?;
        }
        if log_dir.is_some() {
            self.log_dir = log_dir;
        }
        Ok(self)
    }
}
