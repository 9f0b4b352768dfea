use serde::{Deserialize, Serialize};

use crate::config::logging::LoggingConfig;
use crate::errors::FilterError;

/// Top-level configuration for the filter evaluator, loaded from TOML.
///
/// Mirrors the two-step `load` / `validate` pattern: deserialize first,
/// then check cross-field invariants that `serde` can't express.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub safe_browsing: ServiceConfig,

    #[serde(default)]
    pub parental_control: ServiceConfig,

    #[serde(default)]
    pub safe_search: SafeSearchConfig,

    /// Seconds a positive or negative decision stays cached.
    #[serde(default = "default_cache_time_secs")]
    pub cache_time_secs: u64,

    /// Soft byte budget for the Safe Browsing reputation cache.
    #[serde(default = "default_cache_size_bytes")]
    pub safe_browsing_cache_size_bytes: usize,

    /// Soft byte budget for the Parental Control reputation cache.
    #[serde(default = "default_cache_size_bytes")]
    pub parental_cache_size_bytes: usize,

    /// Soft byte budget for the Safe Search rewrite cache.
    #[serde(default = "default_cache_size_bytes")]
    pub safe_search_cache_size_bytes: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Base URL of the remote hash-prefix reputation service.
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SafeSearchConfig {
    #[serde(default)]
    pub enabled: bool,
}

fn default_cache_time_secs() -> u64 {
    30
}

fn default_cache_size_bytes() -> usize {
    4 * 1024 * 1024
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            safe_browsing: ServiceConfig::default(),
            parental_control: ServiceConfig::default(),
            safe_search: SafeSearchConfig::default(),
            cache_time_secs: default_cache_time_secs(),
            safe_browsing_cache_size_bytes: default_cache_size_bytes(),
            parental_cache_size_bytes: default_cache_size_bytes(),
            safe_search_cache_size_bytes: default_cache_size_bytes(),
        }
    }
}

impl FilterConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, FilterError> {
        let config: Self =
            toml::from_str(s).map_err(|e| FilterError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.cache_time_secs == 0 {
            return Err(FilterError::InvalidConfig(
                "cache_time_secs must be greater than zero".into(),
            ));
        }
        if self.safe_browsing.enabled && self.safe_browsing.endpoint.is_none() {
            return Err(FilterError::InvalidConfig(
                "safe_browsing.endpoint is required when safe_browsing is enabled".into(),
            ));
        }
        if self.parental_control.enabled && self.parental_control.endpoint.is_none() {
            return Err(FilterError::InvalidConfig(
                "parental_control.endpoint is required when parental_control is enabled".into(),
            ));
        }
        Ok(())
    }
}
