use sha2::{Digest, Sha256};

/// Candidate names considered for a reputation lookup: `host` itself, then
/// each parent domain formed by stripping labels left-to-right, stopping
/// once two labels remain. The public-suffix boundary is intentionally not
/// consulted — multi-label suffixes (`co.uk`) still stop at two labels, for
/// compatibility with the source this behavior was distilled from.
pub fn candidate_names(host: &str) -> Vec<String> {
    let labels: Vec<&str> = host.split('.').collect();
    let mut candidates = Vec::new();
    for start in 0..labels.len() {
        let remaining = labels.len() - start;
        if remaining < 2 {
            break;
        }
        candidates.push(labels[start..].join("."));
    }
    candidates
}

pub fn full_hash(candidate: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(candidate.as_bytes());
    hasher.finalize().into()
}

pub fn hash_prefix(full: &[u8; 32]) -> [u8; 4] {
    [full[0], full[1], full[2], full[3]]
}
