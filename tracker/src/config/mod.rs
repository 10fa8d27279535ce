//! Configuration management for the Fitness Tracker
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
}

/// CSV export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the `{data_type}_data.csv` files are written to
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive overriding the per-environment default
    pub filter: Option<String>,
    /// Emit JSON lines instead of pretty output
    pub json: bool,
}

/// Nutrition defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    pub daily_calorie_goal: f64,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FT__ prefix)
            // e.g., FT__EXPORT__OUTPUT_DIR=/tmp sets export.output_dir
            .add_source(config::Environment::with_prefix("FT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Filter directive used when RUST_LOG is not set
    pub fn log_filter(&self) -> String {
        self.log_filter_for(Self::is_production())
    }

    fn log_filter_for(&self, production: bool) -> String {
        if let Some(filter) = &self.logging.filter {
            return filter.clone();
        }
        if production {
            "fitness_tracker=info".to_string()
        } else {
            "fitness_tracker=debug".to_string()
        }
    }

    /// Whether log output should be JSON
    pub fn json_logs(&self) -> bool {
        self.json_logs_for(Self::is_production())
    }

    fn json_logs_for(&self, production: bool) -> bool {
        self.logging.json || production
    }
}
