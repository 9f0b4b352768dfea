use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use warden_dns_application::{FullHash, HashPrefix, ReputationClient};
use warden_dns_domain::FilterReason;

use crate::cache::TtlCache;

use super::hash::{candidate_names, full_hash, hash_prefix};

#[derive(Debug, Clone)]
enum PrefixVerdict {
    KnownBad(Vec<FullHash>),
    KnownClean,
}

/// Shared implementation behind Safe Browsing and Parental Control: both
/// compose a `ReputationClient` and a hash-prefix `TtlCache` the same way,
/// differing only in which upstream they hold and which `FilterReason`
/// they report on a hit.
///
/// Grounded on the teacher's `SubnetMatcherService` shape (collaborator +
/// cache behind a single `check`-style entry point).
pub struct ReputationService {
    client: Arc<dyn ReputationClient>,
    cache: TtlCache<HashPrefix, PrefixVerdict>,
    reason: FilterReason,
}

impl ReputationService {
    pub fn new(
        client: Arc<dyn ReputationClient>,
        cache_max_entries: usize,
        ttl_secs: u64,
        reason: FilterReason,
    ) -> Self {
        Self {
            client,
            cache: TtlCache::new(cache_max_entries, ttl_secs),
            reason,
        }
    }

    pub fn reason(&self) -> FilterReason {
        self.reason
    }

    /// Returns `true` if `host` or one of its parent domains (per
    /// `candidate_names`) is known-unsafe.
    ///
    /// On a remote lookup error this fails open: the query is treated as
    /// not flagged by this service, and nothing is cached for it.
    pub async fn check(&self, host: &str) -> bool {
        let candidates = candidate_names(host);
        if candidates.is_empty() {
            return false;
        }

        let hashes: Vec<(HashPrefix, FullHash)> = candidates
            .iter()
            .map(|c| {
                let full = full_hash(c);
                (hash_prefix(&full), full)
            })
            .collect();

        let mut verdicts: HashMap<HashPrefix, PrefixVerdict> = HashMap::new();
        let mut to_query: Vec<HashPrefix> = Vec::new();
        for (prefix, _) in &hashes {
            if let Some(verdict) = self.cache.get(prefix) {
                verdicts.insert(*prefix, verdict);
            } else if !to_query.contains(prefix) {
                to_query.push(*prefix);
            }
        }

        if !to_query.is_empty() {
            match self.client.lookup(&to_query).await {
                Ok(response) => {
                    for prefix in &to_query {
                        let verdict = match response.get(prefix) {
                            Some(known_bad) => PrefixVerdict::KnownBad(known_bad.clone()),
                            None => PrefixVerdict::KnownClean,
                        };
                        self.cache.set(*prefix, verdict.clone());
                        verdicts.insert(*prefix, verdict);
                    }
                }
                Err(err) => {
                    debug!(host, error = %err, "reputation lookup failed, failing open");
                    // Fail-open: unresolved prefixes count as clean for this
                    // check only. Deliberately not cached.
                }
            }
        }

        for (prefix, full) in &hashes {
            if let Some(PrefixVerdict::KnownBad(known_bad)) = verdicts.get(prefix) {
                if known_bad.contains(full) {
                    return true;
                }
            }
        }

        false
    }
}
