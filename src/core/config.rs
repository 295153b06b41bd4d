use super::discount::DEFAULT_THRESHOLD;
use super::report::DEFAULT_PREFIX;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_GAMCO_BASE_URL: &str = "https://www.gabelli.com";
pub const DEFAULT_GAMCO_FUNDS_PATH: &str = "/funds/data/closed_end_funds.json";
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query2.finance.yahoo.com";

fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_funds_path() -> String {
    DEFAULT_GAMCO_FUNDS_PATH.to_string()
}

fn default_asset_type() -> Option<String> {
    Some("Equity".to_string())
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GamcoProviderConfig {
    pub base_url: String,
    #[serde(default = "default_funds_path")]
    pub funds_path: String,
    /// Only funds of this asset type are checked; `null` keeps every fund.
    #[serde(default = "default_asset_type")]
    pub asset_type: Option<String>,
}

impl Default for GamcoProviderConfig {
    fn default() -> Self {
        GamcoProviderConfig {
            base_url: DEFAULT_GAMCO_BASE_URL.to_string(),
            funds_path: default_funds_path(),
            asset_type: default_asset_type(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct YahooProviderConfig {
    pub base_url: String,
}

impl Default for YahooProviderConfig {
    fn default() -> Self {
        YahooProviderConfig {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub gamco: GamcoProviderConfig,
    #[serde(default)]
    pub yahoo: YahooProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    /// Directory for the report file; the OS temp dir when unset.
    pub dir: Option<String>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            dir: None,
            prefix: default_prefix(),
        }
    }
}

impl ReportConfig {
    pub fn report_dir(&self) -> PathBuf {
        self.dir
            .as_ref()
            .map_or_else(std::env::temp_dir, PathBuf::from)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            threshold: default_threshold(),
            report: ReportConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file has been set up.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "navcheck")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
