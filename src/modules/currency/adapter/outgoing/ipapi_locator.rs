use async_trait::async_trait;
use serde::Deserialize;
use std::net::IpAddr;

use crate::modules::currency::application::ports::outgoing::{GeoLocator, LookupError};

#[derive(Debug, Deserialize)]
struct IpapiBody {
    currency: Option<String>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

pub(crate) fn parse_currency(body: &str) -> Result<Option<String>, LookupError> {
    let parsed: IpapiBody = serde_json::from_str(body)
        .map_err(|e| LookupError(format!("malformed lookup body: {e}")))?;

    if parsed.error {
        return Err(LookupError(
            parsed.reason.unwrap_or_else(|| "lookup rejected".to_string()),
        ));
    }

    Ok(parsed.currency.filter(|c| !c.trim().is_empty()))
}

/// ipapi.co lookup: `GET {base}/{ip}/json/`.
#[derive(Clone)]
pub struct IpapiLocator {
    client: reqwest::Client,
    base_url: String,
}

impl IpapiLocator {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn lookup_url(&self, ip: IpAddr) -> String {
        format!("{}/{}/json/", self.base_url, ip)
    }
}

#[async_trait]
impl GeoLocator for IpapiLocator {
    async fn currency_for(&self, ip: IpAddr) -> Result<Option<String>, LookupError> {
        let response = self
            .client
            .get(self.lookup_url(ip))
            .send()
            .await
            .map_err(|e| LookupError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError(format!(
                "lookup endpoint returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError(e.to_string()))?;

        parse_currency(&body)
    }
}
