pub mod compiler;
pub mod engine;
pub mod index;
pub mod service_rules;
pub mod suffix_trie;

pub use compiler::{parse_rule_line, parse_rule_text};
pub use engine::CompiledRuleEngine;
pub use index::{RuleIndex, RuleTier};
pub use service_rules::match_blocked_service;
