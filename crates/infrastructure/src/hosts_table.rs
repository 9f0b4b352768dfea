use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use warden_dns_application::HostsTable as HostsTablePort;
use warden_dns_domain::{RecordType, RuleMatch, RuleModifiers};

#[derive(Debug, Clone)]
struct HostsEntry {
    ip: IpAddr,
    text: Arc<str>,
}

/// Compiled hosts-file table: exact `(host, family)` lookups only, no
/// subdomain inheritance.
///
/// Grounded on the teacher's `BlockIndex` exact-entry storage
/// (`CompactString` keys, `FxBuildHasher`), but keyed by host with an
/// ordered list of IPs per host, since hosts-file lookup must preserve
/// insertion order across multiple lines and IP families.
pub struct CompiledHostsTable {
    by_host: HashMap<CompactString, Vec<HostsEntry>, FxBuildHasher>,
}

impl CompiledHostsTable {
    pub fn empty() -> Self {
        Self {
            by_host: HashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Parses hosts-file text: `IP  host [host...]  [# comment]` per line.
    /// Blank lines, comment-only lines, and lines with an unparseable IP
    /// are silently skipped.
    pub fn parse(text: &str) -> Self {
        let mut by_host: HashMap<CompactString, Vec<HostsEntry>, FxBuildHasher> =
            HashMap::with_hasher(FxBuildHasher);

        for line in text.lines() {
            let without_comment = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };
            let mut parts = without_comment.split_whitespace();
            let Some(ip_token) = parts.next() else {
                continue;
            };
            let Ok(ip) = ip_token.parse::<IpAddr>() else {
                continue;
            };

            let hosts: Vec<&str> = parts.collect();
            if hosts.is_empty() {
                continue;
            }

            for host in hosts {
                let key = CompactString::new(host.to_ascii_lowercase());
                by_host.entry(key).or_default().push(HostsEntry {
                    ip,
                    text: Arc::from(line),
                });
            }
        }

        Self { by_host }
    }
}

impl Default for CompiledHostsTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl HostsTablePort for CompiledHostsTable {
    fn lookup(&self, host: &str, record_type: RecordType) -> Option<RuleMatch> {
        let key = host.to_ascii_lowercase();
        let entries = self.by_host.get(key.as_str())?;

        let wanted_is_v4 = matches!(record_type, RecordType::A);
        let wanted_is_v6 = matches!(record_type, RecordType::AAAA);

        if wanted_is_v4 || wanted_is_v6 {
            for entry in entries {
                let family_matches = match entry.ip {
                    IpAddr::V4(_) => wanted_is_v4,
                    IpAddr::V6(_) => wanted_is_v6,
                };
                if family_matches {
                    return Some(RuleMatch {
                        text: Arc::clone(&entry.text),
                        filter_id: 0,
                        ip: Some(entry.ip),
                        modifiers: RuleModifiers::default(),
                    });
                }
            }
        }

        // Host exists but no address of the requested family: the host is
        // still filtered, the answer is an implicit NODATA.
        entries.first().map(|entry| RuleMatch {
            text: Arc::clone(&entry.text),
            filter_id: 0,
            ip: None,
            modifiers: RuleModifiers::default(),
        })
    }
}
