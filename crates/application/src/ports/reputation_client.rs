use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// First 4 bytes of SHA-256(candidate host), used as a privacy-preserving
/// lookup key against the remote reputation service.
pub type HashPrefix = [u8; 4];
/// Full SHA-256 digest of a host the remote service knows to be unsafe.
pub type FullHash = [u8; 32];

#[derive(Debug, Error)]
pub enum ReputationError {
    #[error("reputation service request failed: {0}")]
    Request(String),
    #[error("reputation service returned an unexpected response: {0}")]
    InvalidResponse(String),
}

/// Port for the upstream Safe Browsing / Parental Control reputation
/// service. Only the contract is specified here — the concrete HTTP client
/// is an infrastructure concern.
#[async_trait]
pub trait ReputationClient: Send + Sync {
    /// Looks up a set of hash prefixes, returning every full hash the
    /// remote knows that begins with one of them. The caller decides
    /// locally whether a candidate's own full hash is present.
    async fn lookup(
        &self,
        prefixes: &[HashPrefix],
    ) -> Result<HashMap<HashPrefix, Vec<FullHash>>, ReputationError>;
}
