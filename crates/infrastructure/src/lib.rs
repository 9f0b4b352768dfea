//! Warden DNS infrastructure layer: concrete adapters behind the
//! application layer's ports — compiled hosts/rule tables, the TTL cache,
//! the reputation and Safe Search services, and the `Evaluator` that
//! composes them.

pub mod cache;
pub mod evaluator;
pub mod hosts_table;
pub mod reputation;
pub mod rule_engine;
pub mod safe_search;

pub use evaluator::Evaluator;
pub use hosts_table::CompiledHostsTable;
pub use reputation::{HttpReputationClient, ReputationService};
pub use rule_engine::CompiledRuleEngine;
pub use safe_search::{SafeSearchService, SystemResolver};
