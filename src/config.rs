use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON output instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Bounds the form fields apply before handing values to the wizard.
#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_max_family_size")]
    pub max_family_size: u32,
    #[serde(default = "default_max_frequency")]
    pub max_frequency: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_family_size: default_max_family_size(),
            max_frequency: default_max_frequency(),
        }
    }
}

fn default_max_family_size() -> u32 {
    20
}

fn default_max_frequency() -> u32 {
    30
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALCART__PLANNER__MAX_FREQUENCY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?
            .set_default(
                "planner.max_family_size",
                i64::from(default_max_family_size()),
            )?
            .set_default("planner.max_frequency", i64::from(default_max_frequency()))?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALCART")
                .separator("__")
                .try_parsing(true),
        );

        if env::var("ENVIRONMENT").is_ok_and(|env| env == "production") {
            builder = builder.set_override("observability.json", true)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.planner.max_family_size < 1 {
            return Err("Planner max_family_size must be at least 1".to_string());
        }
        if self.planner.max_frequency < 1 {
            return Err("Planner max_frequency must be at least 1".to_string());
        }
        Ok(())
    }
}
