use std::net::IpAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::rule::RuleMatch;

/// Why a host was or was not filtered.
///
/// Serializes so the CLI demo (and any other boundary) can report the
/// decision as JSON without a separate presentation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterReason {
    NotFilteredNotFound,
    NotFilteredAllowList,
    FilteredBlockList,
    FilteredSafeBrowsing,
    FilteredParental,
    FilteredSafeSearch,
    FilteredBlockedService,
}

impl FilterReason {
    pub fn is_filtered(self) -> bool {
        !matches!(
            self,
            FilterReason::NotFilteredNotFound | FilterReason::NotFilteredAllowList
        )
    }
}

/// The outcome of evaluating one query against every configured layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    pub is_filtered: bool,
    pub reason: FilterReason,
    /// Rules that justified the decision. Empty for reputation-service
    /// decisions, which report no rule text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleMatch>,
    /// Synthetic address to return: a hosts-file match or a Safe Search
    /// rewrite target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<IpAddr>,
    /// Rewritten hostname, set only by Safe Search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canon_name: Option<Arc<str>>,
}

impl FilterResult {
    pub fn not_found() -> Self {
        Self {
            is_filtered: false,
            reason: FilterReason::NotFilteredNotFound,
            rules: Vec::new(),
            ip: None,
            canon_name: None,
        }
    }

    pub fn allow_listed(rules: Vec<RuleMatch>) -> Self {
        Self {
            is_filtered: false,
            reason: FilterReason::NotFilteredAllowList,
            rules,
            ip: None,
            canon_name: None,
        }
    }

    pub fn blocked(reason: FilterReason, rules: Vec<RuleMatch>, ip: Option<IpAddr>) -> Self {
        debug_assert!(reason.is_filtered());
        Self {
            is_filtered: true,
            reason,
            rules,
            ip,
            canon_name: None,
        }
    }

    pub fn safe_search_rewrite(ip: IpAddr, canon_name: Arc<str>, rules: Vec<RuleMatch>) -> Self {
        Self {
            is_filtered: true,
            reason: FilterReason::FilteredSafeSearch,
            rules,
            ip: Some(ip),
            canon_name: Some(canon_name),
        }
    }
}
