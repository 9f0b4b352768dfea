use std::sync::Arc;

use aho_corasick::AhoCorasick;
use fancy_regex::Regex;
use tracing::warn;
use warden_dns_domain::{CompiledRule, RecordType, RuleMatch, RulePattern};

use super::suffix_trie::SuffixTrie;

#[derive(Debug, Clone)]
struct Entry {
    text: Arc<str>,
    filter_id: i64,
    dnstypes: Option<Vec<RecordType>>,
}

impl Entry {
    fn applies_to(&self, record_type: RecordType) -> bool {
        match &self.dnstypes {
            Some(types) => types.contains(&record_type),
            None => true,
        }
    }

    fn to_rule_match(&self) -> RuleMatch {
        RuleMatch {
            text: Arc::clone(&self.text),
            filter_id: self.filter_id,
            ip: None,
            modifiers: warden_dns_domain::RuleModifiers {
                important: false,
                allowlist: false,
                dnstypes: self.dnstypes.clone(),
            },
        }
    }
}

/// One precedence tier's compiled patterns: suffixes, globs, regexes and
/// bare substrings, each carrying the `dnstype` restriction (if any) of the
/// rule that produced it.
#[derive(Default)]
struct Tier {
    suffixes: SuffixTrie<Entry>,
    wildcards: Vec<(Arc<str>, Entry)>,
    regexes: Vec<(Regex, Entry)>,
    substring_patterns: Vec<Arc<str>>,
    substring_entries: Vec<Entry>,
    substring_automaton: Option<AhoCorasick>,
}

impl Tier {
    fn push(&mut self, rule: &CompiledRule) {
        let entry = Entry {
            text: Arc::clone(&rule.text),
            filter_id: rule.filter_id,
            dnstypes: rule.modifiers.dnstypes.clone(),
        };
        match &rule.pattern {
            RulePattern::Suffix(host) => self.suffixes.insert(host, entry),
            RulePattern::Wildcard(pattern) => self.wildcards.push((Arc::clone(pattern), entry)),
            RulePattern::Regex(pattern) => match Regex::new(pattern) {
                Ok(re) => self.regexes.push((re, entry)),
                Err(err) => warn!(%pattern, error = %err, "failed to compile regex rule"),
            },
            RulePattern::Substring(pattern) => {
                self.substring_patterns.push(Arc::clone(pattern));
                self.substring_entries.push(entry);
            }
        }
    }

    fn finish(&mut self) {
        if self.substring_patterns.is_empty() {
            return;
        }
        match AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&self.substring_patterns)
        {
            Ok(ac) => self.substring_automaton = Some(ac),
            Err(err) => warn!(error = %err, "failed to compile substring automaton"),
        }
    }

    fn find(&self, host: &str, record_type: RecordType) -> Option<RuleMatch> {
        for entry in self.suffixes.lookup(host) {
            if entry.applies_to(record_type) {
                return Some(entry.to_rule_match());
            }
        }

        for (pattern, entry) in &self.wildcards {
            if entry.applies_to(record_type) && glob_match(pattern, host) {
                return Some(entry.to_rule_match());
            }
        }

        for (regex, entry) in &self.regexes {
            if entry.applies_to(record_type) && matches!(regex.is_match(host), Ok(true)) {
                return Some(entry.to_rule_match());
            }
        }

        if let Some(automaton) = &self.substring_automaton {
            if let Some(m) = automaton.find(host) {
                let entry = &self.substring_entries[m.pattern().as_usize()];
                if entry.applies_to(record_type) {
                    return Some(entry.to_rule_match());
                }
            }
        }

        None
    }
}

/// Compiled block/allow filter sets, bucketed into the four precedence
/// tiers from rule-important-ness and polarity. Immutable once built;
/// callers swap the whole index atomically.
#[derive(Default)]
pub struct RuleIndex {
    important_allow: Tier,
    important_block: Tier,
    allow: Tier,
    block: Tier,
}

impl RuleIndex {
    pub fn compile(rules: &[CompiledRule]) -> Self {
        let mut index = RuleIndex::default();
        for rule in rules {
            let tier = match (rule.modifiers.important, rule.modifiers.allowlist) {
                (true, true) => &mut index.important_allow,
                (true, false) => &mut index.important_block,
                (false, true) => &mut index.allow,
                (false, false) => &mut index.block,
            };
            tier.push(rule);
        }
        index.important_allow.finish();
        index.important_block.finish();
        index.allow.finish();
        index.block.finish();
        index
    }

    /// Evaluate `host` against every tier in precedence order, returning
    /// the first match along with which tier it came from.
    pub fn match_host(&self, host: &str, record_type: RecordType) -> Option<(RuleTier, RuleMatch)> {
        if let Some(m) = self.important_allow.find(host, record_type) {
            return Some((RuleTier::ImportantAllow, m));
        }
        if let Some(m) = self.important_block.find(host, record_type) {
            return Some((RuleTier::ImportantBlock, m));
        }
        if let Some(m) = self.allow.find(host, record_type) {
            return Some((RuleTier::Allow, m));
        }
        if let Some(m) = self.block.find(host, record_type) {
            return Some((RuleTier::Block, m));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTier {
    ImportantAllow,
    ImportantBlock,
    Allow,
    Block,
}

/// Minimal `*`-wildcard glob matcher: `*` matches any run of characters
/// (including none), everything else must match literally.
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
