use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::pricing::application::domain::entities::{BillingPeriod, PricingPlan};
use crate::modules::pricing::application::ports::outgoing::pricing_repository::{
    PricingPlanChanges, PricingRepositoryError,
};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Pricing plan not found")]
    NotFound,

    #[error("repository error: {0}")]
    Repository(String),
}

impl From<PricingRepositoryError> for PricingError {
    fn from(e: PricingRepositoryError) -> Self {
        match e {
            PricingRepositoryError::NotFound => PricingError::NotFound,
            other => PricingError::Repository(other.to_string()),
        }
    }
}

/// Unvalidated create input; `name` and `price` are required.
#[derive(Debug, Clone, Default)]
pub struct PricingPlanDraft {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub period: Option<BillingPeriod>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
}

#[async_trait]
pub trait ListPricingPlansUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PricingPlan>, PricingError>;
}

#[async_trait]
pub trait GetPricingPlanUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<PricingPlan, PricingError>;
}

#[async_trait]
pub trait CreatePricingPlanUseCase: Send + Sync {
    async fn execute(&self, draft: PricingPlanDraft) -> Result<PricingPlan, PricingError>;
}

#[async_trait]
pub trait UpdatePricingPlanUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        changes: PricingPlanChanges,
    ) -> Result<PricingPlan, PricingError>;
}

#[async_trait]
pub trait DeletePricingPlanUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), PricingError>;
}
