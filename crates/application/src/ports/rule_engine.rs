use warden_dns_domain::{RecordType, RuleMatch};

/// Outcome of matching a host against a compiled block/allow rule set,
/// already resolved to the precedence order in which block and allow
/// filters are evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    ImportantAllow(RuleMatch),
    ImportantBlock(RuleMatch),
    Allow(RuleMatch),
    Block(RuleMatch),
    NoMatch,
}

/// Port for the compiled block/allow rule set.
///
/// Implementations own the compiled indexes (exact table, suffix trie,
/// regex set, ...); this trait only specifies the query contract.
pub trait RuleEngine: Send + Sync {
    /// Evaluate `host` for `record_type`, returning the winning rule under
    /// the precedence: important allow, important block, allow, block, no
    /// match. Within a tier, a rule only counts if its `dnstype` modifier
    /// (if any) includes `record_type`.
    fn match_host(&self, host: &str, record_type: RecordType) -> RuleOutcome;
}

/// Port for exact hosts-file lookups, consulted before the RuleEngine.
pub trait HostsTable: Send + Sync {
    /// Looks up `host` for `record_type`. Only exact hostname equality
    /// matches — subdomains do not inherit a hosts-file entry.
    fn lookup(&self, host: &str, record_type: RecordType) -> Option<RuleMatch>;
}
