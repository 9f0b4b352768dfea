use std::sync::Arc;

/// A named third-party service (e.g. "tiktok", "facebook") a client has
/// blocked, carrying its own block-rule lines.
#[derive(Debug, Clone)]
pub struct ServiceEntry {
    pub name: Arc<str>,
    /// Block-rule lines for this service, in the same syntax the RuleEngine
    /// compiles from filter lists (`||host^`, glob, ...).
    pub rules: Arc<[Arc<str>]>,
}

/// Per-request settings controlling which layers `check_host` consults.
#[derive(Debug, Clone, Default)]
pub struct RequestFilteringSettings {
    pub filtering_enabled: bool,
    pub safe_browsing_enabled: bool,
    pub parental_enabled: bool,
    pub safe_search_enabled: bool,
    /// Per-client additional blocklists, consulted first and regardless of
    /// `filtering_enabled`.
    pub services_rules: Vec<ServiceEntry>,
}
