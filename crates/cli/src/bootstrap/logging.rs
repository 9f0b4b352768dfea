use tracing::info;
use warden_dns_domain::FilterConfig;

pub fn init_logging(config: &FilterConfig) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .init();

    info!("logging initialized at level: {}", config.logging.level);
}
