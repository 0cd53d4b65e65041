//! CLI configuration.

use anyhow::{bail, Context, Result};
use grocer_commerce::money::Currency;
use grocer_data::ApiConfig;
use grocer_views::ViewConfig;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "GROCER_API_URL";

/// Configuration file (`grocer.toml` or a `.json` equivalent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrocerConfig {
    /// Storefront service connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Catalog browsing.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart behavior.
    #[serde(default)]
    pub cart: CartConfig,

    /// Log output.
    #[serde(default)]
    pub log: LogConfig,
}

impl GrocerConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.page_size == 0 {
            bail!("catalog.page_size must be at least 1");
        }
        if self.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        Ok(())
    }

    /// Apply overrides from the environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
        self
    }

    /// Settings handed to the view controllers.
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            page_size: self.catalog.page_size,
            currency: self.catalog.currency,
            rollback_on_failure: self.cart.rollback_on_failure,
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products revealed per "show more" (default: 16).
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Currency prices are read in (default: ILS).
    #[serde(default)]
    pub currency: Currency,
}

fn default_page_size() -> usize {
    ViewConfig::default().page_size
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            currency: Currency::default(),
        }
    }
}

/// Cart configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Put a removed line back when the service rejects the removal.
    #[serde(default)]
    pub rollback_on_failure: bool,
}

/// Log configuration. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive (default: info).
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Generate a default grocer.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Grocery storefront CLI configuration

[api]
base_url = "{base_url}"
timeout_ms = {timeout_ms}

[catalog]
page_size = {page_size}
currency = "ILS"

[cart]
# Restore a removed line when the cart service rejects the removal
rollback_on_failure = false

[log]
level = "info"
format = "human"
"#,
        base_url = ApiConfig::DEFAULT_BASE_URL,
        timeout_ms = ApiConfig::DEFAULT_TIMEOUT_MS,
        page_size = default_page_size(),
    )
}
