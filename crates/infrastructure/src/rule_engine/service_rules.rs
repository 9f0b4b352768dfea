use std::sync::Arc;

use fancy_regex::Regex;
use warden_dns_domain::{RuleMatch, RulePattern, ServiceEntry};

use super::compiler::parse_rule_line;

/// Per-client "blocked services" are small, request-scoped rule sets — a
/// handful of host patterns per service — so they're matched directly
/// against each line rather than compiled into a `RuleIndex`.
pub fn match_blocked_service(host: &str, services: &[ServiceEntry]) -> Option<RuleMatch> {
    for service in services {
        for line in service.rules.iter() {
            let Some(rule) = parse_rule_line(line, 0) else {
                continue;
            };
            if pattern_matches(&rule.pattern, host) {
                return Some(RuleMatch {
                    text: Arc::clone(&rule.text),
                    filter_id: rule.filter_id,
                    ip: None,
                    modifiers: rule.modifiers,
                });
            }
        }
    }
    None
}

fn pattern_matches(pattern: &RulePattern, host: &str) -> bool {
    match pattern {
        RulePattern::Suffix(suffix) => {
            host == suffix.as_ref() || host.ends_with(&format!(".{suffix}"))
        }
        RulePattern::Wildcard(glob) => glob_match(glob, host),
        RulePattern::Regex(pattern) => Regex::new(pattern)
            .ok()
            .and_then(|re| re.is_match(host).ok())
            .unwrap_or(false),
        RulePattern::Substring(needle) => host.contains(needle.as_ref()),
    }
}

fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    glob_match_from(&pattern, &text)
}

fn glob_match_from(pattern: &[char], text: &[char]) -> bool {
    match pattern.first() {
        None => text.is_empty(),
        Some('*') => {
            let rest = &pattern[1..];
            (0..=text.len()).any(|i| glob_match_from(rest, &text[i..]))
        }
        Some(c) => match text.first() {
            Some(t) if t == c => glob_match_from(&pattern[1..], &text[1..]),
            _ => false,
        },
    }
}
