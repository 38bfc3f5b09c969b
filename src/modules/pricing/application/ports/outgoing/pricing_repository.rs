use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::pricing::application::domain::entities::{BillingPeriod, PricingPlan};

#[derive(Debug, Clone, PartialEq)]
pub struct NewPricingPlan {
    pub name: String,
    pub price: f64,
    pub period: BillingPeriod,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingPlanChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub period: Option<BillingPeriod>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingRepositoryError {
    #[error("Pricing plan not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait PricingRepository: Send + Sync {
    /// Cheapest first.
    async fn list(&self) -> Result<Vec<PricingPlan>, PricingRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<PricingPlan, PricingRepositoryError>;

    async fn create(&self, plan: NewPricingPlan) -> Result<PricingPlan, PricingRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: PricingPlanChanges,
    ) -> Result<PricingPlan, PricingRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), PricingRepositoryError>;
}
