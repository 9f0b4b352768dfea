use std::sync::Arc;

use async_trait::async_trait;
use warden_dns_domain::{Filter, FilterError, FilterResult, RecordType, RequestFilteringSettings};

/// Application-layer port for the filter evaluator.
///
/// `check_host` is the hot path and never returns an error for a policy
/// outcome — transient remote failures are absorbed internally (fail-open)
/// and `Err` is reserved for programmer errors such as corrupted compiled
/// state.
#[async_trait]
pub trait FilterEvaluator: Send + Sync {
    async fn check_host(
        &self,
        host: &str,
        record_type: RecordType,
        settings: &RequestFilteringSettings,
    ) -> Result<FilterResult, FilterError>;

    /// Returns the Safe Search rewrite target for `host`, if any, without
    /// performing a resolution.
    fn safe_search_domain(&self, host: &str) -> Option<Arc<str>>;

    /// Atomically replaces the compiled block/allow filter sets. In-flight
    /// `check_host` calls keep using the old set until they complete.
    ///
    /// When `run_in_background` is true, compilation is kicked off on a
    /// background task and this returns once it's scheduled rather than
    /// once it's installed.
    async fn set_filters(
        &self,
        block: Vec<Filter>,
        allow: Vec<Filter>,
        run_in_background: bool,
    ) -> Result<(), FilterError>;

    /// Releases cache memory and compiled rule indexes.
    async fn close(&self);
}
