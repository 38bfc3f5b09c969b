use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::currency::application::domain::currency::{
    fallback_rates, merge_live_rates, BASE_CURRENCY,
};
use crate::modules::currency::application::ports::incoming::use_cases::{
    GetRatesUseCase, RateSnapshot, RateSource,
};
use crate::modules::currency::application::ports::outgoing::{RatesCache, RatesProvider};

pub struct RatesService {
    provider: Arc<dyn RatesProvider + Send + Sync>,
    cache: Arc<dyn RatesCache + Send + Sync>,
}

impl RatesService {
    pub fn new(
        provider: Arc<dyn RatesProvider + Send + Sync>,
        cache: Arc<dyn RatesCache + Send + Sync>,
    ) -> Self {
        Self { provider, cache }
    }
}

#[async_trait]
impl GetRatesUseCase for RatesService {
    async fn execute(&self) -> RateSnapshot {
        match self.cache.get().await {
            Ok(Some(rates)) => {
                debug!("Serving cached exchange rates");
                return RateSnapshot {
                    base: BASE_CURRENCY,
                    rates,
                    source: RateSource::Cache,
                };
            }
            Ok(None) => {}
            Err(e) => warn!("Rate cache read failed: {}", e),
        }

        match self.provider.latest_usd_rates().await {
            Ok(live) => {
                let rates = merge_live_rates(&live);
                if let Err(e) = self.cache.put(&rates).await {
                    warn!("Rate cache write failed: {}", e);
                }
                RateSnapshot {
                    base: BASE_CURRENCY,
                    rates,
                    source: RateSource::Live,
                }
            }
            // not cached so the next request retries the provider
            Err(e) => {
                warn!("Using fallback exchange rates: {}", e);
                RateSnapshot {
                    base: BASE_CURRENCY,
                    rates: fallback_rates(),
                    source: RateSource::Fallback,
                }
            }
        }
    }
}
