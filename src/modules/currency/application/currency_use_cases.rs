use std::sync::Arc;

use crate::modules::currency::application::ports::incoming::use_cases::{
    DetectCurrencyUseCase, GetRatesUseCase,
};
use crate::modules::currency::application::ports::outgoing::{
    GeoLocator, RatesCache, RatesProvider,
};
use crate::modules::currency::application::service::{DetectCurrencyService, RatesService};

#[derive(Clone)]
pub struct CurrencyUseCases {
    pub rates: Arc<dyn GetRatesUseCase + Send + Sync>,
    pub detect: Arc<dyn DetectCurrencyUseCase + Send + Sync>,
}

impl CurrencyUseCases {
    pub fn new(
        provider: Arc<dyn RatesProvider + Send + Sync>,
        cache: Arc<dyn RatesCache + Send + Sync>,
        locator: Arc<dyn GeoLocator + Send + Sync>,
    ) -> Self {
        Self {
            rates: Arc::new(RatesService::new(provider, cache)),
            detect: Arc::new(DetectCurrencyService::new(locator)),
        }
    }
}
