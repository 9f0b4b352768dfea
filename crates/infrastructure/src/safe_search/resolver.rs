use std::net::IpAddr;

use async_trait::async_trait;
use warden_dns_application::{Resolver, ResolverError};

/// Illustrative `Resolver` backed by the system's own DNS resolution
/// (`getaddrinfo` via `tokio::net::lookup_host`). The evaluator never
/// frames a DNS packet itself; this adapter exists so Safe Search can be
/// exercised end-to-end without every caller supplying their own resolver.
pub struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn lookup_ip_addr(&self, host: &str) -> Result<Vec<IpAddr>, ResolverError> {
        let addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| ResolverError::Failed(e.to_string()))?;
        Ok(addrs.map(|socket_addr| socket_addr.ip()).collect())
    }
}
