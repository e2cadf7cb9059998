//! Small configuration surface for the CLI: a project-local
//! `.search-index/settings.json`, overridable by environment variables,
//! resolved into defaults once and cached for the process lifetime.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

const DEFAULT_MAX_RESULTS: usize = 50;
const DEFAULT_LOG_LEVEL: &str = "info";

/// On-disk / env-var configuration; every field is optional so a partial
/// file only overrides what it mentions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Fully resolved configuration, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub max_results: usize,
    pub log_level: String,
}

impl SearchConfig {
    /// Loads `.search-index/settings.json` relative to `root` if present,
    /// then applies `SEARCH_INDEX_MAX_RESULTS` / `SEARCH_INDEX_LOG_LEVEL`
    /// environment overrides.
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Self::load_from_file(&root.join(".search-index/settings.json"))?.unwrap_or_default();
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: SearchConfig =
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("SEARCH_INDEX_MAX_RESULTS") {
            if let Ok(parsed) = value.parse() {
                self.max_results = Some(parsed);
            }
        }
        if let Ok(value) = std::env::var("SEARCH_INDEX_LOG_LEVEL") {
            self.log_level = Some(value);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log_level {
            let allowed = ["error", "warn", "info", "debug", "trace"];
            if !allowed.contains(&level.as_str()) {
                anyhow::bail!("invalid log_level '{level}', expected one of {allowed:?}");
            }
        }
        Ok(())
    }

    pub fn resolve_with_defaults(&self) -> ResolvedConfig {
        ResolvedConfig {
            max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            log_level: self.log_level.clone().unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl ResolvedConfig {
    /// Parses `log_level` into a `tracing::Level`. `validate` already
    /// restricts the on-disk value to the five standard names, so this
    /// only falls back to `INFO` for a value that slipped past validation
    /// (e.g. the env-var override, which isn't validated).
    pub fn tracing_level(&self) -> Level {
        match self.log_level.as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        }
    }
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

/// Loads and caches the resolved configuration for `root`. Subsequent
/// calls (regardless of `root`) return the cached value.
pub fn get_config(root: &Path) -> &'static ResolvedConfig {
    CONFIG.get_or_init(|| {
        let config = SearchConfig::load(root).unwrap_or_default();
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "ignoring invalid configuration, falling back to defaults");
            return SearchConfig::default().resolve_with_defaults();
        }
        config.resolve_with_defaults()
    })
}
