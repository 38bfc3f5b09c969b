use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::modules::currency::application::ports::outgoing::{RatesProvider, RatesUnavailable};

#[derive(Debug, Deserialize)]
struct LatestRatesBody {
    rates: HashMap<String, f64>,
}

pub(crate) fn parse_rates(body: &str) -> Result<HashMap<String, f64>, RatesUnavailable> {
    serde_json::from_str::<LatestRatesBody>(body)
        .map(|b| b.rates)
        .map_err(|e| RatesUnavailable(format!("malformed rates body: {e}")))
}

/// exchangerate-api.com style endpoint: `{"base":"USD","rates":{"EUR":0.92,...}}`.
#[derive(Clone)]
pub struct ExchangeRateApi {
    client: reqwest::Client,
    url: String,
}

impl ExchangeRateApi {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RatesProvider for ExchangeRateApi {
    async fn latest_usd_rates(&self) -> Result<HashMap<String, f64>, RatesUnavailable> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RatesUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RatesUnavailable(format!(
                "rates endpoint returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RatesUnavailable(e.to_string()))?;

        let rates = parse_rates(&body)?;
        debug!(count = rates.len(), "Fetched live exchange rates");
        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rates_object() {
        let rates = parse_rates(
            r#"{"provider":"x","base":"USD","date":"2025-06-01","rates":{"USD":1,"EUR":0.91,"NZD":1.66}}"#,
        )
        .unwrap();

        assert_eq!(rates["EUR"], 0.91);
        assert_eq!(rates["USD"], 1.0);
        assert_eq!(rates.len(), 3);
    }

    #[test]
    fn body_without_rates_is_unavailable() {
        assert!(parse_rates(r#"{"result":"error"}"#).is_err());
        assert!(parse_rates("<html>").is_err());
    }
}
