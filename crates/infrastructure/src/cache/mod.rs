pub mod coarse_clock;
pub mod ttl_cache;

pub use coarse_clock::{coarse_now_secs, start_clock_ticker};
pub use ttl_cache::TtlCache;
