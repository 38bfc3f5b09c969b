use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("exchange rates unavailable: {0}")]
pub struct RatesUnavailable(pub String);

/// Source of live rates quoted against the US dollar.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatesProvider: Send + Sync {
    async fn latest_usd_rates(&self) -> Result<HashMap<String, f64>, RatesUnavailable>;
}
