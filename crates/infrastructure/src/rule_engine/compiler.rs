use std::sync::Arc;

use warden_dns_domain::{CompiledRule, RecordType, RuleModifiers, RulePattern};

/// Parse one rule line into a `CompiledRule`, or `None` for a blank line or
/// comment (`#`/`!`).
///
/// Supported forms: `||host^`, `@@||host^`, trailing `$important` and
/// `$dnstype=TYPE[,TYPE...]` modifiers, `/regex/`, glob patterns containing
/// `*`, and a bare domain (treated the same as `||domain^`, the common
/// convention in hosts-style block lists).
pub fn parse_rule_line(line: &str, filter_id: i64) -> Option<CompiledRule> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    let (body, allowlist) = match line.strip_prefix("@@") {
        Some(rest) => (rest, true),
        None => (line, false),
    };

    let (pattern_part, modifiers_part) = split_pattern_and_modifiers(body);
    if pattern_part.is_empty() {
        return None;
    }

    let mut modifiers = parse_modifiers(modifiers_part);
    modifiers.allowlist = allowlist;

    let pattern = parse_pattern(pattern_part)?;

    Some(CompiledRule {
        text: Arc::from(line),
        pattern,
        modifiers,
        filter_id,
    })
}

/// Parse every line of `text`, silently skipping lines that don't produce a
/// rule (blank, comment, or malformed).
pub fn parse_rule_text(text: &str, filter_id: i64) -> Vec<CompiledRule> {
    text.lines()
        .filter_map(|line| parse_rule_line(line, filter_id))
        .collect()
}

fn split_pattern_and_modifiers(body: &str) -> (&str, &str) {
    if let Some(inner) = body.strip_prefix('/') {
        if let Some(close) = inner.rfind('/') {
            let pattern = &inner[..close];
            let remainder = inner[close + 1..].trim();
            let modifiers = remainder.strip_prefix('$').unwrap_or("");
            // Re-include the slashes so parse_pattern can recognize the regex.
            return (&body[..close + 2], modifiers);
        }
    }

    match body.split_once('$') {
        Some((pattern, modifiers)) => (pattern.trim(), modifiers.trim()),
        None => (body.trim(), ""),
    }
}

fn parse_pattern(pattern: &str) -> Option<RulePattern> {
    if pattern.starts_with('/') && pattern.ends_with('/') && pattern.len() > 2 {
        return Some(RulePattern::Regex(Arc::from(
            pattern[1..pattern.len() - 1].to_ascii_lowercase(),
        )));
    }

    if let Some(host) = pattern.strip_prefix("||") {
        let host = host.strip_suffix('^').unwrap_or(host);
        if host.is_empty() {
            return None;
        }
        return Some(RulePattern::Suffix(Arc::from(host.to_ascii_lowercase())));
    }

    if pattern.contains('*') {
        return Some(RulePattern::Wildcard(Arc::from(
            pattern.to_ascii_lowercase(),
        )));
    }

    if pattern.contains('.') {
        return Some(RulePattern::Suffix(Arc::from(pattern.to_ascii_lowercase())));
    }

    Some(RulePattern::Substring(Arc::from(
        pattern.to_ascii_lowercase(),
    )))
}

fn parse_modifiers(s: &str) -> RuleModifiers {
    let mut modifiers = RuleModifiers::default();
    let tokens: Vec<&str> = s.split(',').map(str::trim).collect();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if token.is_empty() {
            i += 1;
            continue;
        }
        if let Some(first_type) = token.strip_prefix("dnstype=") {
            let mut types = Vec::new();
            if let Ok(rt) = first_type.parse::<RecordType>() {
                types.push(rt);
            }
            i += 1;
            while i < tokens.len() {
                match tokens[i].parse::<RecordType>() {
                    Ok(rt) => {
                        types.push(rt);
                        i += 1;
                    }
                    Err(_) => break,
                }
            }
            modifiers.dnstypes = Some(types);
            continue;
        }
        if token == "important" {
            modifiers.important = true;
        }
        i += 1;
    }
    modifiers
}
