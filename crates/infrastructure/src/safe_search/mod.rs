pub mod resolver;
pub mod service;
pub mod table;

pub use resolver::SystemResolver;
pub use service::{SafeSearchMatch, SafeSearchService};
