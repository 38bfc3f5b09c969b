use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Billing unit a plan price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Project,
    Hour,
    Month,
    Year,
}

impl BillingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Project => "project",
            BillingPeriod::Hour => "hour",
            BillingPeriod::Month => "month",
            BillingPeriod::Year => "year",
        }
    }

    pub fn from_stored(value: &str) -> Self {
        match value {
            "hour" => BillingPeriod::Hour,
            "month" => BillingPeriod::Month,
            "year" => BillingPeriod::Year,
            _ => BillingPeriod::Project,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: Uuid,
    #[schema(example = "Starter")]
    pub name: String,
    /// USD
    #[schema(example = 499.0)]
    pub price: f64,
    pub period: BillingPeriod,
    pub description: String,
    #[schema(example = json!(["Responsive design", "Contact form"]))]
    pub features: Vec<String>,
    pub popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_parses_stored_text() {
        for p in [
            BillingPeriod::Project,
            BillingPeriod::Hour,
            BillingPeriod::Month,
            BillingPeriod::Year,
        ] {
            assert_eq!(BillingPeriod::from_stored(p.as_str()), p);
        }
        assert_eq!(BillingPeriod::from_stored("weekly"), BillingPeriod::Project);
    }

    #[test]
    fn period_rejects_unknown_json_value() {
        assert!(serde_json::from_str::<BillingPeriod>(r#""fortnight""#).is_err());
        assert_eq!(
            serde_json::from_str::<BillingPeriod>(r#""month""#).unwrap(),
            BillingPeriod::Month
        );
    }
}
