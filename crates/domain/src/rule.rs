use std::net::IpAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::record_type::RecordType;

/// Modifiers trailing a `$` on an adblock-style rule line, e.g.
/// `||ads.example^$important,dnstype=A,AAAA`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleModifiers {
    /// `$important` — outranks every rule of the opposite polarity that
    /// isn't itself important.
    pub important: bool,
    /// True for rules written with the `@@` allowlist prefix.
    pub allowlist: bool,
    /// `$dnstype=A,AAAA` — restricts the rule to the listed record types.
    /// `None` means the rule applies regardless of queried type.
    pub dnstypes: Option<Vec<RecordType>>,
}

impl RuleModifiers {
    pub fn applies_to(&self, record_type: RecordType) -> bool {
        match &self.dnstypes {
            Some(types) => types.contains(&record_type),
            None => true,
        }
    }
}

/// A single rule line's match pattern, independent of how it is indexed at
/// runtime (exact table, suffix trie, regex set, ...).
#[derive(Debug, Clone)]
pub enum RulePattern {
    /// `host^` / `||host^` — exact host or any subdomain of it.
    Suffix(Arc<str>),
    /// A glob pattern such as `*.ads.*` using `*` as a wildcard.
    Wildcard(Arc<str>),
    /// `/pattern/` — an adblock regex rule.
    Regex(Arc<str>),
    /// A plain substring match, used for bare rule lines with no anchors.
    Substring(Arc<str>),
}

/// A rule line parsed and ready for compilation into a filter set.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Original source line, whitespace-preserved.
    pub text: Arc<str>,
    pub pattern: RulePattern,
    pub modifiers: RuleModifiers,
    /// The filter this rule line came from.
    pub filter_id: i64,
}

/// The winning rule produced by the RuleEngine for a matched query, or a
/// hosts-table entry reported in the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Original source line, whitespace-preserved.
    pub text: Arc<str>,
    pub filter_id: i64,
    /// Present for hosts-style lines; `None` for adblock-style rules.
    pub ip: Option<IpAddr>,
    pub modifiers: RuleModifiers,
}
