use async_trait::async_trait;
use ferrous_lookup_application::ports::ListStore;
use ferrous_lookup_domain::config::StoreConfig;
use ferrous_lookup_domain::DomainError;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, ConnectionInfo, IntoConnectionInfo, RedisError};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

/// `ListStore` backed by Redis lists (LPUSH / LRANGE).
///
/// The connection is opened on first use so the service can start while
/// Redis is still down. `ConnectionManager` reconnects on its own after that.
pub struct RedisListStore {
    client: redis::Client,
    address: String,
    connect_timeout: Duration,
    connection: OnceCell<ConnectionManager>,
}

impl RedisListStore {
    pub fn new(config: &StoreConfig) -> Result<Self, DomainError> {
        let client = redis::Client::open(connection_info(config)?).map_err(store_error)?;

        info!(
            address = %config.address(),
            db = config.db,
            auth = !config.password.is_empty(),
            "Redis list store configured"
        );

        Ok(Self {
            client,
            address: config.address(),
            connect_timeout: Duration::from_millis(config.connect_timeout_ms),
            connection: OnceCell::new(),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, DomainError> {
        self.connection
            .get_or_try_init(|| async {
                debug!(address = %self.address, "Opening Redis connection");
                let config = manager_config(self.connect_timeout);
                ConnectionManager::new_with_config(self.client.clone(), config).await
            })
            .await
            .cloned()
            .map_err(store_error)
    }
}

#[async_trait]
impl ListStore for RedisListStore {
    #[instrument(skip(self, value))]
    async fn push_front(&self, key: &str, value: String) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        conn.lpush::<_, _, ()>(key, value).await.map_err(store_error)
    }

    #[instrument(skip(self))]
    async fn read_front(&self, key: &str, count: usize) -> Result<Vec<String>, DomainError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let stop = isize::try_from(count).unwrap_or(isize::MAX) - 1;

        let mut conn = self.connection().await?;
        conn.lrange::<_, Vec<String>>(key, 0, stop)
            .await
            .map_err(store_error)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(store_error)?;
        debug!(reply = %pong, "Redis ping");
        Ok(())
    }
}

pub fn connection_info(config: &StoreConfig) -> Result<ConnectionInfo, DomainError> {
    let mut info = (config.host.as_str(), config.port)
        .into_connection_info()
        .map_err(store_error)?;
    info.redis.db = config.db;
    if !config.password.is_empty() {
        info.redis.password = Some(config.password.clone());
    }
    Ok(info)
}

/// Single attempt per connect: a refused server surfaces as an error right
/// away and the next call tries again.
fn manager_config(connect_timeout: Duration) -> ConnectionManagerConfig {
    ConnectionManagerConfig::new()
        .set_number_of_retries(0)
        .set_connection_timeout(connect_timeout)
}

fn store_error(e: RedisError) -> DomainError {
    DomainError::StoreUnavailable(e.to_string())
}
