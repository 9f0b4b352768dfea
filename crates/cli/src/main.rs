//! Warden DNS filter evaluator — command-line demo.
//!
//! Builds an `Evaluator` from a hosts file and block/allow filter lists
//! given on the command line, evaluates a single query against it, and
//! prints the resulting `FilterResult` as JSON. This is the ambient
//! composition root the core crate is exercised through; it owns no DNS
//! socket and no HTTP admin surface — those remain external collaborators.

mod bootstrap;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use warden_dns_application::{FilterEvaluator, ReputationClient};
use warden_dns_domain::{
    Filter, FilterKind, FilterReason, RecordType, RequestFilteringSettings, ServiceConfig,
    ServiceEntry,
};
use warden_dns_infrastructure::reputation::HttpReputationClient;
use warden_dns_infrastructure::safe_search::SystemResolver;
use warden_dns_infrastructure::{Evaluator, ReputationService, SafeSearchService};

/// A rough average entry size used to turn a configured byte budget into a
/// `TtlCache` entry count; the cache itself is bounded by entry count, not
/// an exact byte size.
const AVG_CACHE_ENTRY_BYTES: usize = 96;

#[derive(Parser)]
#[command(name = "warden-dns")]
#[command(version)]
#[command(about = "DNS content-filtering evaluator")]
struct Cli {
    /// Hostname to evaluate.
    host: String,

    /// DNS record type being queried.
    #[arg(default_value = "A")]
    qtype: String,

    /// Path to a TOML FilterConfig file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hosts-file to compile ("IP host [host...]" per line).
    #[arg(long)]
    hosts: Option<PathBuf>,

    /// Block-list filter file; may be given multiple times.
    #[arg(long = "block", value_name = "PATH")]
    block_filters: Vec<PathBuf>,

    /// Allow-list filter file; may be given multiple times.
    #[arg(long = "allow", value_name = "PATH")]
    allow_filters: Vec<PathBuf>,

    /// Disable the hosts table and block/allow rule engine for this query.
    #[arg(long)]
    no_filtering: bool,

    /// Force Safe Search on for this query, overriding the config file.
    #[arg(long)]
    safe_search: bool,

    /// Force Safe Browsing on for this query, overriding the config file.
    #[arg(long)]
    safe_browsing: bool,

    /// Force Parental Control on for this query, overriding the config file.
    #[arg(long)]
    parental: bool,

    /// A per-client blocked service: "name=rule1,rule2". May be repeated.
    #[arg(long = "service", value_name = "NAME=RULES")]
    services: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref())?;
    bootstrap::init_logging(&config);

    let record_type =
        RecordType::from_str(&cli.qtype).map_err(|e| anyhow::anyhow!("{e}"))?;

    let hosts_text = match &cli.hosts {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading hosts file {}", path.display()))?,
        None => String::new(),
    };

    let block_filters = load_filters(&cli.block_filters, FilterKind::Block)?;
    let allow_filters = load_filters(&cli.allow_filters, FilterKind::Allow)?;

    let safe_browsing_cache_entries =
        (config.safe_browsing_cache_size_bytes / AVG_CACHE_ENTRY_BYTES).max(64);
    let parental_cache_entries =
        (config.parental_cache_size_bytes / AVG_CACHE_ENTRY_BYTES).max(64);
    let safe_search_cache_entries =
        (config.safe_search_cache_size_bytes / AVG_CACHE_ENTRY_BYTES).max(64);

    let safe_browsing = reputation_service(
        &config.safe_browsing,
        safe_browsing_cache_entries,
        config.cache_time_secs,
        FilterReason::FilteredSafeBrowsing,
    );
    let parental = reputation_service(
        &config.parental_control,
        parental_cache_entries,
        config.cache_time_secs,
        FilterReason::FilteredParental,
    );
    let safe_search = config.safe_search.enabled.then(|| {
        SafeSearchService::new(
            Arc::new(SystemResolver),
            safe_search_cache_entries,
            config.cache_time_secs,
        )
    });

    let evaluator = Evaluator::new(
        &hosts_text,
        &block_filters,
        &allow_filters,
        safe_browsing,
        parental,
        safe_search,
    );

    let settings = RequestFilteringSettings {
        filtering_enabled: !cli.no_filtering,
        safe_browsing_enabled: cli.safe_browsing || config.safe_browsing.enabled,
        parental_enabled: cli.parental || config.parental_control.enabled,
        safe_search_enabled: cli.safe_search || config.safe_search.enabled,
        services_rules: parse_services(&cli.services)?,
    };

    let result = evaluator
        .check_host(&cli.host, record_type, &settings)
        .await?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    evaluator.close().await;
    Ok(())
}

/// Reads each filter file into a `Filter`, numbering them in argument order
/// starting from 1. `kind` only controls compiler bookkeeping — allowlist
/// lines inside a block-kind file still allowlist, per `Filter`'s doc.
fn load_filters(paths: &[PathBuf], kind: FilterKind) -> anyhow::Result<Vec<Filter>> {
    paths
        .iter()
        .enumerate()
        .map(|(idx, path)| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading filter file {}", path.display()))?;
            let lines = text.lines().map(Arc::from).collect();
            Ok(Filter::new(idx as i64 + 1, kind, lines))
        })
        .collect()
}

/// Parses `--service name=rule1,rule2` into a `ServiceEntry`.
fn parse_services(raw: &[String]) -> anyhow::Result<Vec<ServiceEntry>> {
    raw.iter()
        .map(|entry| {
            let (name, rules) = entry
                .split_once('=')
                .with_context(|| format!("malformed --service entry: {entry}"))?;
            let rules: Arc<[Arc<str>]> = rules.split(',').map(Arc::from).collect();
            Ok(ServiceEntry {
                name: Arc::from(name),
                rules,
            })
        })
        .collect()
}

/// Builds a `ReputationService` when the service is enabled and has an
/// endpoint configured; `None` otherwise, which the `Evaluator` treats as
/// the service never matching.
fn reputation_service(
    config: &ServiceConfig,
    cache_entries: usize,
    ttl_secs: u64,
    reason: FilterReason,
) -> Option<ReputationService> {
    if !config.enabled {
        return None;
    }
    let endpoint = config.endpoint.as_ref()?;
    let client: Arc<dyn ReputationClient> = Arc::new(HttpReputationClient::new(endpoint.as_str()));
    Some(ReputationService::new(client, cache_entries, ttl_secs, reason))
}
