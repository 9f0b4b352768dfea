//! Warden DNS domain layer: pure types with no I/O.
pub mod config;
pub mod errors;
pub mod filter;
pub mod record_type;
pub mod result;
pub mod rule;
pub mod settings;

pub use config::{FilterConfig, SafeSearchConfig, ServiceConfig};
pub use errors::FilterError;
pub use filter::{Filter, FilterKind};
pub use record_type::RecordType;
pub use result::{FilterReason, FilterResult};
pub use rule::{CompiledRule, RuleMatch, RuleModifiers, RulePattern};
pub use settings::{RequestFilteringSettings, ServiceEntry};
