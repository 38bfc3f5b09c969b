use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::currency::application::domain::currency::{
    base_currency, display_currency_for, Currency,
};
use crate::modules::currency::application::ports::incoming::use_cases::DetectCurrencyUseCase;
use crate::modules::currency::application::ports::outgoing::GeoLocator;

pub struct DetectCurrencyService {
    locator: Arc<dyn GeoLocator + Send + Sync>,
}

impl DetectCurrencyService {
    pub fn new(locator: Arc<dyn GeoLocator + Send + Sync>) -> Self {
        Self { locator }
    }
}

fn is_routable(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_loopback()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast())
        }
        IpAddr::V6(v6) => !(v6.is_loopback() || v6.is_unspecified()),
    }
}

#[async_trait]
impl DetectCurrencyUseCase for DetectCurrencyService {
    async fn execute(&self, client_ip: Option<IpAddr>) -> &'static Currency {
        let Some(ip) = client_ip.filter(is_routable) else {
            debug!("No public client address, defaulting currency");
            return base_currency();
        };

        match self.locator.currency_for(ip).await {
            Ok(local) => display_currency_for(local.as_deref()),
            Err(e) => {
                warn!("Currency detection failed: {}", e);
                base_currency()
            }
        }
    }
}
