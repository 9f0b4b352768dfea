use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use warden_dns_application::{
    FullHash, HashPrefix, ReputationClient, ReputationError, Resolver, ResolverError,
};

/// A `ReputationClient` stub whose upstream can be toggled unreachable
/// mid-test, to exercise the "fail-open after the cache already has an
/// answer" scenario (spec scenario 9).
pub struct StubReputationClient {
    bad: HashMap<HashPrefix, Vec<FullHash>>,
    unreachable: AtomicBool,
}

impl StubReputationClient {
    pub fn blocking(bad_host: &str) -> Arc<Self> {
        let full = warden_dns_infrastructure::reputation::candidate_names(bad_host)
            .into_iter()
            .map(|c| sha256(&c))
            .next()
            .expect("bad_host must have at least one candidate");
        let prefix = [full[0], full[1], full[2], full[3]];
        let mut bad = HashMap::new();
        bad.insert(prefix, vec![full]);
        Arc::new(Self {
            bad,
            unreachable: AtomicBool::new(false),
        })
    }

    pub fn go_unreachable(&self) {
        self.unreachable.store(true, Ordering::SeqCst);
    }
}

fn sha256(s: &str) -> [u8; 32] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hasher.finalize().into()
}

#[async_trait]
impl ReputationClient for StubReputationClient {
    async fn lookup(
        &self,
        prefixes: &[HashPrefix],
    ) -> Result<HashMap<HashPrefix, Vec<FullHash>>, ReputationError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(ReputationError::Request("upstream unreachable".into()));
        }
        let mut out = HashMap::new();
        for prefix in prefixes {
            if let Some(hashes) = self.bad.get(prefix) {
                out.insert(*prefix, hashes.clone());
            }
        }
        Ok(out)
    }
}

/// A `Resolver` stub returning a fixed set of addresses, used to exercise
/// Safe Search's rewrite-then-resolve path without a real network lookup.
pub struct StubResolver(pub Vec<IpAddr>);

#[async_trait]
impl Resolver for StubResolver {
    async fn lookup_ip_addr(&self, _host: &str) -> Result<Vec<IpAddr>, ResolverError> {
        Ok(self.0.clone())
    }
}
