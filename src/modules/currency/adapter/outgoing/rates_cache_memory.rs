use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::modules::currency::application::domain::currency::Rates;
use crate::modules::currency::application::ports::outgoing::{CacheError, RatesCache};

/// In-process cache used when no Redis is configured.
pub struct MemoryRatesCache {
    ttl: Duration,
    entry: RwLock<Option<(Instant, Rates)>>,
}

impl MemoryRatesCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }
}

#[async_trait]
impl RatesCache for MemoryRatesCache {
    async fn get(&self) -> Result<Option<Rates>, CacheError> {
        let guard = self.entry.read().await;
        Ok(guard
            .as_ref()
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, rates)| rates.clone()))
    }

    async fn put(&self, rates: &Rates) -> Result<(), CacheError> {
        *self.entry.write().await = Some((Instant::now(), rates.clone()));
        Ok(())
    }
}
