use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use warden_dns_application::{FullHash, HashPrefix, ReputationClient, ReputationError};

/// Illustrative HTTP-backed `ReputationClient`.
///
/// The wire format (a JSON POST of hex-encoded prefixes, a JSON map of
/// hex-encoded prefix → hex-encoded full hashes back) is this crate's own
/// choice — the real Safe Browsing / Parental Control upstream is an
/// external collaborator whose protocol is out of scope; this adapter
/// exists so the evaluator can be exercised end-to-end without every
/// caller writing their own `ReputationClient`.
pub struct HttpReputationClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpReputationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct LookupRequest {
    prefixes: Vec<String>,
}

#[derive(Deserialize)]
struct LookupResponse {
    matches: HashMap<String, Vec<String>>,
}

#[async_trait]
impl ReputationClient for HttpReputationClient {
    async fn lookup(
        &self,
        prefixes: &[HashPrefix],
    ) -> Result<HashMap<HashPrefix, Vec<FullHash>>, ReputationError> {
        let request = LookupRequest {
            prefixes: prefixes.iter().map(hex::encode_prefix).collect(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ReputationError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ReputationError::Request(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| ReputationError::InvalidResponse(e.to_string()))?;

        let mut out = HashMap::with_capacity(body.matches.len());
        for (prefix_hex, hash_hexes) in body.matches {
            let prefix = hex::decode_prefix(&prefix_hex)
                .ok_or_else(|| ReputationError::InvalidResponse(format!("bad prefix: {prefix_hex}")))?;
            let mut hashes = Vec::with_capacity(hash_hexes.len());
            for h in hash_hexes {
                hashes.push(
                    hex::decode_hash(&h)
                        .ok_or_else(|| ReputationError::InvalidResponse(format!("bad hash: {h}")))?,
                );
            }
            out.insert(prefix, hashes);
        }

        Ok(out)
    }
}

mod hex {
    use warden_dns_application::{FullHash, HashPrefix};

    pub fn encode_prefix(prefix: &HashPrefix) -> String {
        encode(prefix)
    }

    fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    pub fn decode_prefix(s: &str) -> Option<HashPrefix> {
        let bytes = decode(s)?;
        bytes.try_into().ok()
    }

    pub fn decode_hash(s: &str) -> Option<FullHash> {
        let bytes = decode(s)?;
        bytes.try_into().ok()
    }

    fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
            .collect()
    }
}
