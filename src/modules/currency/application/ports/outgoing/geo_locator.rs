use async_trait::async_trait;
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("geolocation failed: {0}")]
pub struct LookupError(pub String);

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Local currency code for the address, if the lookup service knows it.
    async fn currency_for(&self, ip: IpAddr) -> Result<Option<String>, LookupError>;
}
