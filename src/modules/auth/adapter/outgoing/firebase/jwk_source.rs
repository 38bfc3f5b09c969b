use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use reqwest::header::CACHE_CONTROL;
use std::time::Duration;
use tracing::debug;

use crate::modules::auth::application::ports::outgoing::IdentityError;

#[derive(Debug, Clone)]
pub struct FetchedKeys {
    pub keys: JwkSet,
    /// Lifetime advertised by the publisher; `None` means do not cache.
    pub max_age: Option<Duration>,
}

/// Where the verifier gets the provider's public signing keys from.
#[async_trait]
pub trait JwkSource: Send + Sync {
    async fn fetch(&self) -> Result<FetchedKeys, IdentityError>;
}

#[derive(Clone)]
pub struct HttpJwkSource {
    client: reqwest::Client,
    url: String,
}

impl HttpJwkSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl JwkSource for HttpJwkSource {
    async fn fetch(&self) -> Result<FetchedKeys, IdentityError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| IdentityError::KeysUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IdentityError::KeysUnavailable(format!(
                "key endpoint returned {}",
                response.status()
            )));
        }

        let max_age = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_max_age);

        let body = response
            .text()
            .await
            .map_err(|e| IdentityError::KeysUnavailable(e.to_string()))?;

        let keys: JwkSet = serde_json::from_str(&body)
            .map_err(|e| IdentityError::KeysUnavailable(format!("malformed key set: {e}")))?;

        debug!(count = keys.keys.len(), ?max_age, "Fetched identity provider keys");

        Ok(FetchedKeys { keys, max_age })
    }
}

pub(crate) fn parse_max_age(cache_control: &str) -> Option<Duration> {
    cache_control
        .split(',')
        .map(str::trim)
        .find_map(|directive| directive.strip_prefix("max-age="))
        .and_then(|secs| secs.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
