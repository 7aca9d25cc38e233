use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file holding the saved weekly plan
    pub plan_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// External recipe catalog; the bundled one is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FASTHEALTH__STORAGE__PLAN_PATH, etc.)
    /// 2. Config file specified by path, CONFIG_PATH, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("storage.plan_path", "data/weekly-plan.json")?
            .set_default("site.url", "http://localhost:8080/")?
            .set_default("site.name", "Fast & Health")?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FASTHEALTH")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.storage.plan_path.trim().is_empty() {
            return Err("Plan storage path must not be empty".to_string());
        }
        if self.site.url.trim().is_empty() {
            return Err("Site url must not be empty".to_string());
        }
        if self
            .catalog
            .path
            .as_deref()
            .is_some_and(|path| path.trim().is_empty())
        {
            return Err("Catalog path must not be blank when set".to_string());
        }
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of {}",
                self.observability.log_level,
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}
