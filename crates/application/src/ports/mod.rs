pub mod filter_evaluator;
pub mod reputation_client;
pub mod resolver;
pub mod rule_engine;

pub use filter_evaluator::FilterEvaluator;
pub use reputation_client::{FullHash, HashPrefix, ReputationClient, ReputationError};
pub use resolver::{Resolver, ResolverError};
pub use rule_engine::{HostsTable, RuleEngine, RuleOutcome};
