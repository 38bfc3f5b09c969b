use async_trait::async_trait;
use serde::Serialize;
use std::net::IpAddr;
use utoipa::ToSchema;

use crate::modules::currency::application::domain::currency::{Currency, Rates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    Live,
    Cache,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RateSnapshot {
    #[schema(example = "USD")]
    pub base: &'static str,
    #[schema(value_type = Object)]
    pub rates: Rates,
    pub source: RateSource,
}

/// Never fails: the fallback table is always available.
#[async_trait]
pub trait GetRatesUseCase: Send + Sync {
    async fn execute(&self) -> RateSnapshot;
}

/// Never fails: any lookup problem resolves to US dollars.
#[async_trait]
pub trait DetectCurrencyUseCase: Send + Sync {
    async fn execute(&self, client_ip: Option<IpAddr>) -> &'static Currency;
}
