//! Warden DNS application layer: ports and orchestration, no concrete I/O.
pub mod ports;

pub use ports::{
    FilterEvaluator, FullHash, HashPrefix, HostsTable, ReputationClient, ReputationError,
    Resolver, ResolverError, RuleEngine, RuleOutcome,
};
