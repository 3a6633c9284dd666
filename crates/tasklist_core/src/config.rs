//! Environment-derived configuration for the core.
//!
//! # Invariants
//! - Blank variables behave exactly like unset ones.
//! - Resolution never fails; validation happens when logging starts.

use crate::logging::{default_log_level, init_logging};
use std::path::PathBuf;

/// Variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "TASKLIST_LOG_LEVEL";
/// Variable overriding the log directory.
pub const ENV_LOG_DIR: &str = "TASKLIST_LOG_DIR";

const DEFAULT_LOG_DIR_NAME: &str = "tasklist-logs";

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `fetch`, falling back to defaults.
    pub fn from_env_with(fetch: impl Fn(&'static str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &'static str| {
            fetch(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: non_blank(ENV_LOG_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        }
    }

    /// Starts file logging with this configuration.
    ///
    /// # Errors
    /// See [`init_logging`].
    pub fn init_logging(&self) -> Result<(), String> {
        let dir = self
            .log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: {}", self.log_dir.display()))?;
        init_logging(self.log_level.as_str(), dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::path::PathBuf;

    #[test]
    fn unset_and_blank_variables_fall_back_to_defaults() {
        let unset = CoreConfig::from_env_with(|_| None);
        let blank = CoreConfig::from_env_with(|_| Some("   ".to_string()));
        assert_eq!(unset, CoreConfig::default());
        assert_eq!(blank, CoreConfig::default());
        assert!(unset.log_dir.ends_with("tasklist-logs"));
    }

    #[test]
    fn variables_override_defaults_after_trimming() {
        let config = CoreConfig::from_env_with(|key| match key {
            ENV_LOG_LEVEL => Some(" warn ".to_string()),
            ENV_LOG_DIR => Some("/var/log/tasklist".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/tasklist"));
    }
}
