use std::net::IpAddr;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("resolution failed: {0}")]
    Failed(String),
    #[error("resolution was cancelled")]
    Cancelled,
}

/// Port for the DNS resolver Safe Search calls to resolve a rewrite target
/// hostname to a concrete address.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn lookup_ip_addr(&self, host: &str) -> Result<Vec<IpAddr>, ResolverError>;
}
