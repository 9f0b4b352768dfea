pub mod filter;
pub mod logging;

pub use filter::{FilterConfig, SafeSearchConfig, ServiceConfig};
pub use logging::LoggingConfig;
