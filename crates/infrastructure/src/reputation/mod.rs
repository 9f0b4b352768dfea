pub mod hash;
pub mod http_client;
pub mod service;

pub use hash::candidate_names;
pub use http_client::HttpReputationClient;
pub use service::ReputationService;
