use std::net::IpAddr;
use std::sync::Arc;

use tracing::debug;
use warden_dns_application::Resolver;
use warden_dns_domain::RecordType;

use crate::cache::TtlCache;

use super::table::{self, RewriteTarget};

/// The outcome of a Safe Search check: the address to return, and the
/// canonical hostname it was resolved through (absent for the Yandex-style
/// hardcoded IPs, which never rewrite to a named host).
#[derive(Debug, Clone)]
pub struct SafeSearchMatch {
    pub ip: IpAddr,
    pub canon_name: Option<Arc<str>>,
}

/// Domain-rewrite table plus a pluggable `Resolver`, caching the resolved
/// address under the *original* hostname for the configured TTL — not the
/// rewrite target, since that's what a repeat query for the same host will
/// look up again.
pub struct SafeSearchService {
    resolver: Arc<dyn Resolver>,
    cache: TtlCache<Arc<str>, IpAddr>,
}

impl SafeSearchService {
    pub fn new(resolver: Arc<dyn Resolver>, cache_max_entries: usize, ttl_secs: u64) -> Self {
        Self {
            resolver,
            cache: TtlCache::new(cache_max_entries, ttl_secs),
        }
    }

    /// Returns the rewrite table's canonical target hostname for `host`,
    /// without performing any resolution. `None` both when there's no
    /// rewrite entry and for the hardcoded-IP entries, which never rewrite
    /// to a named host.
    pub fn rewrite_domain(&self, host: &str) -> Option<Arc<str>> {
        match table::lookup(host)? {
            RewriteTarget::Resolve(canon) => Some(Arc::from(canon)),
            RewriteTarget::StaticIp(_) => None,
        }
    }

    pub async fn check(&self, host: &str, record_type: RecordType) -> Option<SafeSearchMatch> {
        match table::lookup(host)? {
            RewriteTarget::StaticIp(ip) => {
                if matches!(record_type, RecordType::A) {
                    Some(SafeSearchMatch {
                        ip,
                        canon_name: None,
                    })
                } else {
                    None
                }
            }
            RewriteTarget::Resolve(canon) => {
                let key: Arc<str> = Arc::from(host.to_ascii_lowercase());
                if let Some(ip) = self.cache.get(&key) {
                    return Some(SafeSearchMatch {
                        ip,
                        canon_name: Some(Arc::from(canon)),
                    });
                }

                let addrs = match self.resolver.lookup_ip_addr(canon).await {
                    Ok(addrs) => addrs,
                    Err(err) => {
                        debug!(host, error = %err, "safe search resolver failed, skipping rewrite");
                        return None;
                    }
                };

                let chosen = match record_type {
                    RecordType::A => addrs.into_iter().find(IpAddr::is_ipv4),
                    RecordType::AAAA => addrs.into_iter().find(IpAddr::is_ipv6),
                    _ => None,
                };

                chosen.map(|ip| {
                    self.cache.set(key, ip);
                    SafeSearchMatch {
                        ip,
                        canon_name: Some(Arc::from(canon)),
                    }
                })
            }
        }
    }
}
