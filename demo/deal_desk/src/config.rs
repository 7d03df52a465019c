//! Deal Desk configuration management.
//!
//! Handles loading of `deal_desk.toml` with environment variable override
//! support.
//!
//! ```toml
//! [desk]
//! team_label = "MANKEY_PE"
//! mock_deals = 100
//! seed = 42
//! log_level = "info"
//!
//! [engine]
//! horizon_years = 5
//!
//! [engine.decision]
//! min_risk_adjusted_irr = 0.15
//! min_moic = 2.0
//!
//! [monte_carlo]
//! trials = 1000
//! ```

use lbo_core::config::{ConfigError as EngineConfigError, EngineConfig};
use lbo_pricing::mc::MonteCarloDefaults;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "deal_desk.toml";

/// Upper bound on generated mock deals.
pub const MAX_MOCK_DEALS: usize = 1_000_000;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Desk-level settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeskSettings {
    /// Label printed in report headers.
    pub team_label: String,
    /// Number of mock deals generated when no input file is given.
    pub mock_deals: usize,
    /// Seed for the mock-deal generator.
    pub seed: u64,
    /// Log level
    pub log_level: String,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            team_label: "MANKEY_PE".to_string(),
            mock_deals: 100,
            seed: 42,
            log_level: "info".to_string(),
        }
    }
}

/// Deal Desk configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Desk settings.
    pub desk: DeskSettings,
    /// Evaluation engine settings.
    pub engine: EngineConfig,
    /// Monte Carlo defaults for the `simulate` command.
    pub monte_carlo: MonteCarloDefaults,
}

impl DeskConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Recognised variables: `DEAL_DESK_TEAM_LABEL`, `DEAL_DESK_MOCK_DEALS`,
    /// `DEAL_DESK_SEED`, `DEAL_DESK_LOG_LEVEL`, `DEAL_DESK_HORIZON_YEARS`,
    /// `DEAL_DESK_MC_TRIALS`. Unparseable numbers are ignored.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(label) = std::env::var("DEAL_DESK_TEAM_LABEL") {
            self.desk.team_label = label;
        }

        if let Some(n) = env_parse("DEAL_DESK_MOCK_DEALS") {
            self.desk.mock_deals = n;
        }

        if let Some(seed) = env_parse("DEAL_DESK_SEED") {
            self.desk.seed = seed;
        }

        if let Ok(log_level) = std::env::var("DEAL_DESK_LOG_LEVEL") {
            self.desk.log_level = log_level;
        }

        if let Some(horizon) = env_parse("DEAL_DESK_HORIZON_YEARS") {
            self.engine.horizon_years = horizon;
        }

        if let Some(trials) = env_parse("DEAL_DESK_MC_TRIALS") {
            self.monte_carlo.trials = trials;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.desk.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.desk.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.desk.team_label.trim().is_empty() {
            errors.push("team_label cannot be empty".to_string());
        }

        if self.desk.mock_deals == 0 {
            errors.push("mock_deals must be greater than 0".to_string());
        }
        if self.desk.mock_deals > MAX_MOCK_DEALS {
            errors.push(format!(
                "mock_deals {} exceeds maximum allowed (1,000,000)",
                self.desk.mock_deals
            ));
        }

        if let Err(EngineConfigError::Validation(engine_errors)) = self.engine.validate() {
            errors.extend(engine_errors.into_iter().map(|e| format!("engine: {}", e)));
        }

        if let Err(e) = self.monte_carlo.to_config() {
            errors.push(format!("monte_carlo: {}", e));
        }
        if let Err(e) = self.monte_carlo.growth().validate() {
            errors.push(format!("monte_carlo: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default();
        assert_eq!(config.desk.team_label, "MANKEY_PE");
        assert_eq!(config.desk.mock_deals, 100);
        assert_eq!(config.desk.seed, 42);
        assert_eq!(config.engine.horizon_years, 5);
        assert_eq!(config.monte_carlo.trials, 1_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DeskConfig::from_toml(
            r#"
            [desk]
            team_label = "Growth Fund II"

            [engine.decision]
            min_moic = 2.5

            [monte_carlo]
            sigma = 0.3
            "#,
        )
        .unwrap();

        assert_eq!(config.desk.team_label, "Growth Fund II");
        assert_eq!(config.desk.mock_deals, 100);
        assert_eq!(config.engine.decision.min_moic, 2.5);
        assert_eq!(config.engine.decision.min_risk_adjusted_irr, 0.15);
        assert_eq!(config.monte_carlo.sigma, 0.3);
        assert_eq!(config.monte_carlo.mu, 0.05);
    }

    #[test]
    fn test_parse_error() {
        let result = DeskConfig::from_toml("[desk\nteam_label = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[desk]\nmock_deals = 7").unwrap();

        let config = DeskConfig::load(file.path()).unwrap();
        assert_eq!(config.desk.mock_deals, 7);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, DeskConfig::default());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("DEAL_DESK_TEAM_LABEL", "Env Team");
        let config = DeskConfig::default().with_env_override();
        assert_eq!(config.desk.team_label, "Env Team");
        std::env::remove_var("DEAL_DESK_TEAM_LABEL");
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = DeskConfig::default();
        config.desk.log_level = "loud".to_string();
        config.desk.mock_deals = 0;
        config.engine.horizon_years = 0;
        config.monte_carlo.sigma = -1.0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4, "{:?}", errors);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("mock_deals")));
                assert!(errors.iter().any(|e| e.starts_with("engine: horizon_years")));
                assert!(errors.iter().any(|e| e.contains("sigma")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_oversized_horizon() {
        let config = DeskConfig::from_toml(
            r#"
            [engine]
            horizon_years = 4294967295
            "#,
        )
        .unwrap();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1, "{:?}", errors);
                assert!(errors[0].starts_with("engine: horizon_years"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO"] {
            let mut config = DeskConfig::default();
            config.desk.log_level = level.to_string();
            assert!(config.validate().is_ok(), "{} should be valid", level);
        }
    }
}
