use std::path::Path;

use anyhow::Context;
use tracing::info;
use warden_dns_domain::FilterConfig;

/// Loads a `FilterConfig` from `config_path`, or `FilterConfig::default()`
/// when none is given, then validates it.
pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<FilterConfig> {
    let config = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            FilterConfig::from_toml_str(&text)?
        }
        None => FilterConfig::default(),
    };

    info!(
        config_file = %config_path.map(Path::display).map(|d| d.to_string()).unwrap_or_else(|| "default".to_string()),
        safe_browsing = config.safe_browsing.enabled,
        parental_control = config.parental_control.enabled,
        safe_search = config.safe_search.enabled,
        cache_time_secs = config.cache_time_secs,
        "configuration loaded"
    );

    Ok(config)
}
