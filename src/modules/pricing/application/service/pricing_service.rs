use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::pricing::application::domain::entities::PricingPlan;
use crate::modules::pricing::application::ports::incoming::use_cases::{
    CreatePricingPlanUseCase, DeletePricingPlanUseCase, GetPricingPlanUseCase,
    ListPricingPlansUseCase, PricingError, PricingPlanDraft, UpdatePricingPlanUseCase,
};
use crate::modules::pricing::application::ports::outgoing::pricing_repository::{
    NewPricingPlan, PricingPlanChanges, PricingRepository,
};
use crate::shared::validation::{RequiredFields, ValidationError};

pub struct PricingService<R>
where
    R: PricingRepository,
{
    repository: R,
}

impl<R> PricingService<R>
where
    R: PricingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn check_price(price: f64) -> Result<f64, ValidationError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ValidationError::Invalid(
            "price must be a non-negative number".to_string(),
        ))
    }
}

fn validate_draft(draft: PricingPlanDraft) -> Result<NewPricingPlan, ValidationError> {
    RequiredFields::new()
        .text("name", draft.name.as_deref())
        .present("price", draft.price.as_ref())
        .finish()?;

    Ok(NewPricingPlan {
        name: draft.name.unwrap_or_default().trim().to_string(),
        price: check_price(draft.price.unwrap_or_default())?,
        period: draft.period.unwrap_or_default(),
        description: draft.description.unwrap_or_default(),
        features: draft.features.unwrap_or_default(),
        popular: draft.popular.unwrap_or(false),
    })
}

#[async_trait]
impl<R> ListPricingPlansUseCase for PricingService<R>
where
    R: PricingRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PricingPlan>, PricingError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> GetPricingPlanUseCase for PricingService<R>
where
    R: PricingRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<PricingPlan, PricingError> {
        Ok(self.repository.get(id).await?)
    }
}

#[async_trait]
impl<R> CreatePricingPlanUseCase for PricingService<R>
where
    R: PricingRepository + Send + Sync,
{
    async fn execute(&self, draft: PricingPlanDraft) -> Result<PricingPlan, PricingError> {
        let plan = validate_draft(draft)?;
        Ok(self.repository.create(plan).await?)
    }
}

#[async_trait]
impl<R> UpdatePricingPlanUseCase for PricingService<R>
where
    R: PricingRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        mut changes: PricingPlanChanges,
    ) -> Result<PricingPlan, PricingError> {
        if let Some(price) = changes.price {
            changes.price = Some(check_price(price)?);
        }
        Ok(self.repository.update(id, changes).await?)
    }
}

#[async_trait]
impl<R> DeletePricingPlanUseCase for PricingService<R>
where
    R: PricingRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), PricingError> {
        Ok(self.repository.delete(id).await?)
    }
}
