use ferrous_lookup_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }

    info!(
        level = %config.logging.level,
        json = config.logging.json,
        "Logging initialized"
    );
    info!(
        bind = %config.server.bind_address,
        port = config.server.port,
        redis = %config.store.address(),
        redis_db = config.store.db,
        history_key = %config.history.key,
        max_query_history = config.history.max_query_history,
        "Configuration loaded"
    );
}
