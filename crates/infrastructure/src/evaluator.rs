use std::sync::Arc;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use tracing::debug;
use warden_dns_application::{FilterEvaluator as FilterEvaluatorPort, HostsTable, RuleEngine, RuleOutcome};
use warden_dns_domain::{
    Filter, FilterError, FilterReason, FilterResult, RecordType, RequestFilteringSettings,
    RuleMatch, RuleModifiers,
};

use crate::cache::start_clock_ticker;
use crate::hosts_table::CompiledHostsTable;
use crate::reputation::ReputationService;
use crate::rule_engine::{match_blocked_service, CompiledRuleEngine};
use crate::safe_search::SafeSearchService;

/// Composes every filtering layer in the fixed evaluation order: per-client
/// service overrides, hosts table, block/allow rules, Safe Search, Safe
/// Browsing, Parental Control.
///
/// Grounded on the teacher's `BlockFilterEngine`: an `ArcSwap`-guarded
/// compiled index plus owned `Arc` handles to the collaborator services,
/// implementing the application layer's `FilterEvaluator` port the way
/// `BlockFilterEngine` implements `BlockFilterEnginePort`.
pub struct Evaluator {
    hosts: ArcSwap<CompiledHostsTable>,
    rule_engine: Arc<CompiledRuleEngine>,
    safe_browsing: Option<ReputationService>,
    parental: Option<ReputationService>,
    safe_search: Option<SafeSearchService>,
    clock_ticker: tokio::task::JoinHandle<()>,
}

impl Evaluator {
    pub fn new(
        hosts_text: &str,
        block_filters: &[Filter],
        allow_filters: &[Filter],
        safe_browsing: Option<ReputationService>,
        parental: Option<ReputationService>,
        safe_search: Option<SafeSearchService>,
    ) -> Self {
        Self {
            hosts: ArcSwap::from_pointee(CompiledHostsTable::parse(hosts_text)),
            rule_engine: Arc::new(CompiledRuleEngine::from_filters(block_filters, allow_filters)),
            safe_browsing,
            parental,
            safe_search,
            clock_ticker: start_clock_ticker(),
        }
    }

    pub fn set_hosts(&self, hosts_text: &str) {
        self.hosts.store(Arc::new(CompiledHostsTable::parse(hosts_text)));
    }
}

#[async_trait]
impl FilterEvaluatorPort for Evaluator {
    async fn check_host(
        &self,
        host: &str,
        record_type: RecordType,
        settings: &RequestFilteringSettings,
    ) -> Result<FilterResult, FilterError> {
        let host = host.to_ascii_lowercase();

        // 1. Per-client blocked-service overrides run first, regardless of
        //    every other flag.
        if !settings.services_rules.is_empty() {
            if let Some(rule) = match_blocked_service(&host, &settings.services_rules) {
                return Ok(FilterResult::blocked(
                    FilterReason::FilteredBlockedService,
                    vec![rule],
                    None,
                ));
            }
        }

        // 2. Hosts table and block/allow rules, only when filtering is on.
        if settings.filtering_enabled {
            let hosts = self.hosts.load();
            if let Some(m) = hosts.lookup(&host, record_type) {
                let ip = m.ip;
                return Ok(FilterResult::blocked(
                    FilterReason::FilteredBlockList,
                    vec![m],
                    ip,
                ));
            }

            match self.rule_engine.match_host(&host, record_type) {
                RuleOutcome::ImportantAllow(m) | RuleOutcome::Allow(m) => {
                    return Ok(FilterResult::allow_listed(vec![m]));
                }
                RuleOutcome::ImportantBlock(m) | RuleOutcome::Block(m) => {
                    return Ok(FilterResult::blocked(FilterReason::FilteredBlockList, vec![m], None));
                }
                RuleOutcome::NoMatch => {}
            }
        }

        // 3. Safe Search rewrite.
        if settings.safe_search_enabled {
            if let Some(service) = &self.safe_search {
                if let Some(m) = service.check(&host, record_type).await {
                    let rule = RuleMatch {
                        text: Arc::from("safe-search-rewrite"),
                        filter_id: 0,
                        ip: Some(m.ip),
                        modifiers: RuleModifiers::default(),
                    };
                    return Ok(FilterResult::safe_search_rewrite(
                        m.ip,
                        m.canon_name.unwrap_or_else(|| Arc::from(host.as_str())),
                        vec![rule],
                    ));
                }
            }
        }

        // 4. Safe Browsing.
        if settings.safe_browsing_enabled {
            if let Some(service) = &self.safe_browsing {
                if service.check(&host).await {
                    return Ok(FilterResult::blocked(
                        FilterReason::FilteredSafeBrowsing,
                        Vec::new(),
                        None,
                    ));
                }
            }
        }

        // 5. Parental Control.
        if settings.parental_enabled {
            if let Some(service) = &self.parental {
                if service.check(&host).await {
                    return Ok(FilterResult::blocked(
                        FilterReason::FilteredParental,
                        Vec::new(),
                        None,
                    ));
                }
            }
        }

        debug!(host, "query not filtered by any layer");
        Ok(FilterResult::not_found())
    }

    fn safe_search_domain(&self, host: &str) -> Option<Arc<str>> {
        self.safe_search
            .as_ref()
            .and_then(|service| service.rewrite_domain(host))
    }

    async fn set_filters(
        &self,
        block: Vec<Filter>,
        allow: Vec<Filter>,
        run_in_background: bool,
    ) -> Result<(), FilterError> {
        if run_in_background {
            let engine = Arc::clone(&self.rule_engine);
            tokio::spawn(async move {
                engine.set_rules(&block, &allow);
            });
        } else {
            self.rule_engine.set_rules(&block, &allow);
        }
        Ok(())
    }

    async fn close(&self) {
        self.rule_engine.set_rules(&[], &[]);
        self.clock_ticker.abort();
    }
}
