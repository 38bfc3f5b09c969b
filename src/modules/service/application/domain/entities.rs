use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A priced offering shown on the pricing page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: Uuid,
    #[schema(example = "API Development")]
    pub name: String,
    #[serde(rename = "priceUSD")]
    #[schema(example = 500.0)]
    pub price_usd: f64,
    #[schema(example = "1 week")]
    pub turnaround: String,
    pub is_starting_price: bool,
    pub is_monthly: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
