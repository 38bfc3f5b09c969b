use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::currency::application::domain::currency::Rates;
use crate::modules::currency::application::ports::outgoing::{CacheError, RatesCache};

const RATES_KEY: &str = "currency:rates:usd";

/// Redis-backed rate cache; key TTL does the expiry.
#[derive(Clone)]
pub struct RedisRatesCache {
    pool: Arc<Pool>,
    ttl: Duration,
}

impl RedisRatesCache {
    pub fn new(pool: Arc<Pool>, ttl: Duration) -> Self {
        Self { pool, ttl }
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, CacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl RatesCache for RedisRatesCache {
    async fn get(&self) -> Result<Option<Rates>, CacheError> {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = conn
            .get(RATES_KEY)
            .await
            .map_err(|e| CacheError(e.to_string()))?;

        raw.map(|json| serde_json::from_str::<Rates>(&json))
            .transpose()
            .map_err(|e| CacheError(format!("corrupt cached rates: {e}")))
    }

    async fn put(&self, rates: &Rates) -> Result<(), CacheError> {
        let json = serde_json::to_string(rates).map_err(|e| CacheError(e.to_string()))?;
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(RATES_KEY, json, self.ttl.as_secs().max(1))
            .await
            .map_err(|e| CacheError(e.to_string()))?;

        Ok(())
    }
}
