use async_trait::async_trait;

use crate::modules::currency::application::domain::currency::Rates;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rate cache error: {0}")]
pub struct CacheError(pub String);

/// Time-boxed store for the merged rate table. Expiry is the adapter's job.
#[async_trait]
pub trait RatesCache: Send + Sync {
    async fn get(&self) -> Result<Option<Rates>, CacheError>;
    async fn put(&self, rates: &Rates) -> Result<(), CacheError>;
}
