use arc_swap::ArcSwap;
use std::sync::Arc;
use warden_dns_application::{RuleEngine as RuleEnginePort, RuleOutcome};
use warden_dns_domain::{Filter, RecordType};

use super::compiler::parse_rule_line;
use super::index::{RuleIndex, RuleTier};

/// Compiled block/allow rule engine, replaced atomically on `set_rules`.
///
/// Grounded on the teacher's `BlockIndex`/`ArcSwap<BlockIndex>` reload
/// pattern: readers never observe a partially rebuilt index, and in-flight
/// lookups keep using the old `Arc` until they finish.
pub struct CompiledRuleEngine {
    index: ArcSwap<RuleIndex>,
}

impl CompiledRuleEngine {
    pub fn new() -> Self {
        Self {
            index: ArcSwap::from_pointee(RuleIndex::default()),
        }
    }

    pub fn from_filters(block: &[Filter], allow: &[Filter]) -> Self {
        let engine = Self::new();
        engine.set_rules(block, allow);
        engine
    }

    /// Recompile the engine from filter lines and swap it in atomically.
    pub fn set_rules(&self, block: &[Filter], allow: &[Filter]) {
        let mut rules = Vec::new();
        for filter in block {
            for line in filter.lines.iter() {
                if let Some(rule) = parse_rule_line(line, filter.id) {
                    rules.push(rule);
                }
            }
        }
        for filter in allow {
            for line in filter.lines.iter() {
                if let Some(rule) = parse_rule_line(line, filter.id) {
                    rules.push(rule);
                }
            }
        }
        self.index.store(Arc::new(RuleIndex::compile(&rules)));
    }
}

impl Default for CompiledRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEnginePort for CompiledRuleEngine {
    fn match_host(&self, host: &str, record_type: RecordType) -> RuleOutcome {
        let index = self.index.load();
        match index.match_host(host, record_type) {
            Some((RuleTier::ImportantAllow, m)) => RuleOutcome::ImportantAllow(m),
            Some((RuleTier::ImportantBlock, m)) => RuleOutcome::ImportantBlock(m),
            Some((RuleTier::Allow, m)) => RuleOutcome::Allow(m),
            Some((RuleTier::Block, m)) => RuleOutcome::Block(m),
            None => RuleOutcome::NoMatch,
        }
    }
}
